//! Declaration locator
//!
//! Finds test-group (`describe`) calls among a file's top-level statements and test-case (`it`)
//! calls among the direct children of a group's callback body.
//!
//! A statement is a declaration of kind K iff it is a call statement whose callee is a plain name
//! that `specsplit_core::lang::declarations::classify` maps to K. Member callees (`describe.skip`),
//! nested calls and non-call statements never qualify.

use std::fmt;

use specsplit_core::lang::declarations::{self, DeclarationKind};
use specsplit_syntax::ast::{BodyId, Stmt, SyntaxTree};

/// Position of the group callback among the group call's arguments.
const GROUP_BODY_ARG: usize = 1;

/// Classify a statement as a test declaration.
pub fn declaration_kind(stmt: &Stmt) -> Option<DeclarationKind> {
    let call = stmt.kind.as_call()?;
    declarations::classify(call.callee_name()?)
}

/// Indices of the top-level group declarations, in source order.
pub fn find_groups(tree: &SyntaxTree) -> Vec<usize> {
    indices_of(tree, BodyId::ROOT, DeclarationKind::Group)
}

/// Body of the group declared at top-level index `group`.
///
/// `None` when the index is not a group, or when the group call has no second argument with a
/// block function body.
pub fn group_body(tree: &SyntaxTree, group: usize) -> Option<BodyId> {
    let id = *tree.root().stmts.get(group)?;
    let stmt = tree.stmt(id);
    if declaration_kind(stmt) != Some(DeclarationKind::Group) {
        return None;
    }
    stmt.kind.as_call()?.args.get(GROUP_BODY_ARG)?.function_body
}

/// Indices of the case declarations directly inside the group at top-level index `group`.
pub fn find_cases(tree: &SyntaxTree, group: usize) -> Vec<usize> {
    match group_body(tree, group) {
        Some(body) => indices_of(tree, body, DeclarationKind::Case),
        None => Vec::new(),
    }
}

fn indices_of(tree: &SyntaxTree, body: BodyId, kind: DeclarationKind) -> Vec<usize> {
    tree.children(body)
        .filter(|(_, _, stmt)| declaration_kind(stmt) == Some(kind))
        .map(|(index, _, _)| index)
        .collect()
}

/// Structural shape of a spec file, as far as splitting is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecShape {
    /// No top-level group; the file runs unchanged.
    NoGroup,
    /// Exactly one top-level group; `cases` may be empty.
    SingleGroup { group: usize, cases: Vec<usize> },
    /// Several top-level groups; the file runs unchanged.
    MultiGroup { groups: Vec<usize> },
}

impl SpecShape {
    /// Return `true` if the file yields at least one generated spec.
    pub fn is_splittable(&self) -> bool {
        matches!(self, SpecShape::SingleGroup { cases, .. } if !cases.is_empty())
    }
}

impl fmt::Display for SpecShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecShape::NoGroup => write!(f, "no group"),
            SpecShape::SingleGroup { group, cases } => {
                write!(f, "single group at {} with cases {:?}", group, cases)
            }
            SpecShape::MultiGroup { groups } => write!(f, "multiple groups at {:?}", groups),
        }
    }
}

/// Locate groups and cases in one pass.
pub fn classify(tree: &SyntaxTree) -> SpecShape {
    let groups = find_groups(tree);
    match groups.as_slice() {
        [] => SpecShape::NoGroup,
        [group] => SpecShape::SingleGroup {
            group: *group,
            cases: find_cases(tree, *group),
        },
        _ => SpecShape::MultiGroup { groups },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specsplit_syntax::parser::parse_source;

    #[test]
    fn test_single_group_with_cases() {
        let tree = parse_source(
            "import x from 'y'\n\ndescribe('A', () => {\n  before(() => {});\n  it('a', fa);\n  const k = 1;\n  it('b', fb);\n});\n",
        )
        .unwrap();
        assert_eq!(find_groups(&tree), vec![1]);
        assert_eq!(find_cases(&tree, 1), vec![1, 3]);
        assert_eq!(
            classify(&tree),
            SpecShape::SingleGroup {
                group: 1,
                cases: vec![1, 3]
            }
        );
    }

    #[test]
    fn test_names_compare_case_insensitively() {
        let tree = parse_source("Describe('A', function () { IT('a', f); It('b', g); })").unwrap();
        assert_eq!(find_cases(&tree, 0), vec![0, 1]);
    }

    #[test]
    fn test_multi_and_no_group() {
        let multi = parse_source("describe('A', () => {})\ndescribe('B', () => {})\n").unwrap();
        assert_eq!(classify(&multi), SpecShape::MultiGroup { groups: vec![0, 1] });
        assert!(!classify(&multi).is_splittable());

        let none = parse_source("it('loose', () => {})\n").unwrap();
        assert_eq!(classify(&none), SpecShape::NoGroup);
    }

    #[test]
    fn test_only_direct_plain_calls_count() {
        let source = "\
describe('A', () => {
  describe.skip('inner', () => { it('x', f); });
  if (flag) { it('y', f); }
  it.only('z', f);
  helper(it('w', f));
});
";
        let tree = parse_source(source).unwrap();
        assert!(find_cases(&tree, 0).is_empty());
    }

    #[test]
    fn test_group_without_callback_has_no_cases() {
        let tree = parse_source("describe('A')\n").unwrap();
        assert_eq!(group_body(&tree, 0), None);
        assert_eq!(classify(&tree), SpecShape::SingleGroup { group: 0, cases: vec![] });

        let tree = parse_source("describe('A', cases)\n").unwrap();
        assert!(find_cases(&tree, 0).is_empty());
    }

    #[test]
    fn test_group_body_rejects_non_group_index() {
        let tree = parse_source("const a = 1\ndescribe('A', () => { it('a', f) })\n").unwrap();
        assert_eq!(group_body(&tree, 0), None);
        assert_eq!(group_body(&tree, 7), None);
        assert!(group_body(&tree, 1).is_some());
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(
            SpecShape::SingleGroup { group: 0, cases: vec![0, 2] }.to_string(),
            "single group at 0 with cases [0, 2]"
        );
        assert_eq!(SpecShape::NoGroup.to_string(), "no group");
    }
}
