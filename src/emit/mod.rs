//! Code emitter
//!
//! Renders a [`SyntaxTree`] view back to source text. Rendering copies the original bytes and leaves
//! out the full span of every statement an edit drops, so:
//! - with no edits the output is the input, byte for byte
//! - retained code keeps its formatting, comments and quoting
//! - a dropped statement takes its leading trivia and same-line trailing comments with it
//!
//! Dropping a statement can bring together two neighbours that automatic semicolon insertion would
//! read as one expression (`a = {}` followed by `(f)()`). A `;` is written in front of the second
//! one in that case.

mod writer;

pub use writer::SourceWriter;

use std::cmp::Reverse;

use specsplit_syntax::ast::{Span, Stmt, SyntaxTree};

use crate::partition::BodyEdit;

/// Characters that continue an expression from the previous line.
const CONTINUATION_STARTS: [char; 6] = ['(', '[', '`', '+', '-', '/'];

/// One change to the source, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Patch {
    /// Leave the span out.
    Remove(Span),
    /// Write a `;` before the byte offset.
    Separate(usize),
}

impl Patch {
    fn position(&self) -> (usize, Reverse<usize>) {
        match *self {
            Patch::Remove(span) => (span.start, Reverse(span.end)),
            Patch::Separate(at) => (at, Reverse(at)),
        }
    }
}

/// Render `tree` with every statement not retained by `edits` removed.
pub fn render(tree: &SyntaxTree, edits: &[BodyEdit]) -> String {
    let mut patches = Vec::new();
    for edit in edits {
        let mut last_kept: Option<&Stmt> = None;
        let mut dropped = false;
        for (_, id, stmt) in tree.children(edit.body) {
            if !edit.retains(id) {
                patches.push(Patch::Remove(stmt.full));
                dropped = true;
                continue;
            }
            if dropped && last_kept.is_some_and(|prev| joins_expression(tree, prev, stmt)) {
                patches.push(Patch::Separate(stmt.span.start));
            }
            last_kept = Some(stmt);
            dropped = false;
        }
    }
    patches.sort_by_key(Patch::position);

    let mut writer = SourceWriter::new(tree.source());
    for patch in patches {
        match patch {
            // Patches inside an already removed statement are gone with it.
            Patch::Remove(span) if span.start >= writer.cursor() => {
                writer.copy_to(span.start);
                writer.skip_to(span.end);
            }
            Patch::Separate(at) if at >= writer.cursor() => {
                writer.copy_to(at);
                writer.insert(";");
            }
            _ => {}
        }
    }
    writer.finish()
}

/// `true` if `next`, written right after `prev`, would continue `prev`'s last expression.
fn joins_expression(tree: &SyntaxTree, prev: &Stmt, next: &Stmt) -> bool {
    !tree.text(prev.span).ends_with(';') && tree.text(next.span).starts_with(CONTINUATION_STARTS)
}

/// Render the source unchanged.
pub fn render_unchanged(tree: &SyntaxTree) -> String {
    render(tree, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{locate, partition};
    use specsplit_syntax::ast::BodyId;
    use specsplit_syntax::parser::parse_source;

    #[test]
    fn test_no_edits_is_lossless() {
        let source = "#!/usr/bin/env node\n// header\ndescribe(\"A\", function () {\n\tit('a', () => {}) // flaky\n\n});\n\n";
        let tree = parse_source(source).unwrap();
        assert_eq!(render_unchanged(&tree), source);
    }

    #[test]
    fn test_drops_cases_with_their_trivia() {
        let source = "\
describe('A', () => {
  // first
  it('a', fa); // note a
  it('b', fb);
  const k = 1;
});
";
        let tree = parse_source(source).unwrap();
        let cases = locate::find_cases(&tree, 0);
        let parts = partition::partition(&tree, 0, &cases);

        assert_eq!(
            render(&tree, &[parts[0].edit.clone()]),
            "describe('A', () => {\n  // first\n  it('a', fa); // note a\n  const k = 1;\n});\n"
        );
        assert_eq!(
            render(&tree, &[parts[1].edit.clone()]),
            "describe('A', () => {\n  it('b', fb);\n  const k = 1;\n});\n"
        );
    }

    #[test]
    fn test_edit_on_root_body() {
        let source = "a();\nb();\nc();\n";
        let tree = parse_source(source).unwrap();
        let keep = tree.root().stmts[1];
        let edit = BodyEdit {
            body: BodyId::ROOT,
            retained: vec![keep],
        };
        assert_eq!(render(&tree, &[edit]), "\nb();\n");
    }

    fn render_case(source: &str, view: usize) -> String {
        let tree = parse_source(source).unwrap();
        let cases = locate::find_cases(&tree, 0);
        let parts = partition::partition(&tree, 0, &cases);
        render(&tree, &[parts[view].edit.clone()])
    }

    #[test]
    fn test_separates_statement_after_removed_leading_semicolon() {
        let source = "\
describe('A', () => {
  const o = { a: 1 }
  it('a', f)
  ;(async () => {})()
  it('b', g)
});
";
        assert_eq!(
            render_case(source, 1),
            "describe('A', () => {\n  const o = { a: 1 };(async () => {})()\n  it('b', g)\n});\n"
        );
        assert_eq!(
            render_case(source, 0),
            "describe('A', () => {\n  const o = { a: 1 }\n  it('a', f)\n  ;(async () => {})()\n});\n"
        );
    }

    #[test]
    fn test_separates_array_statement_after_removed_case() {
        let source = "\
describe('A', () => {
  const sel = '#x'
  it('a', f);
  [1, 2].forEach(n => check(sel, n))
  it('b', g)
});
";
        let rendered = render_case(source, 1);
        assert_eq!(
            rendered,
            "describe('A', () => {\n  const sel = '#x'\n  ;[1, 2].forEach(n => check(sel, n))\n  it('b', g)\n});\n"
        );

        let tree = parse_source(&rendered).unwrap();
        let body = locate::group_body(&tree, 0).unwrap();
        let stmts: Vec<&str> = tree.children(body).map(|(_, _, s)| tree.text(s.span)).collect();
        assert_eq!(stmts, vec!["const sel = '#x'\n  ;", "[1, 2].forEach(n => check(sel, n))", "it('b', g)"]);
    }

    #[test]
    fn test_no_separator_after_terminated_statement() {
        let source = "describe('A', () => {\n  setup();\n  it('a', f)\n  ;[1].map(g)\n  it('b', h)\n});\n";
        assert_eq!(
            render_case(source, 1),
            "describe('A', () => {\n  setup();[1].map(g)\n  it('b', h)\n});\n"
        );
    }
}
