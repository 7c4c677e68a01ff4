//! Property-based tests for the splitter
//!
//! These tests use proptest to verify invariants across many randomly
//! generated spec files, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use specsplit::locate::{self, SpecShape};
use specsplit::{emit, parser, partition};

// =============================================================================
// Strategies
// =============================================================================

/// One group-body statement: (shape, trailing comment, blank line before).
fn item_strategy() -> impl Strategy<Value = (u8, bool, bool)> {
    (0u8..6, any::<bool>(), any::<bool>())
}

/// Render a single-group spec file and return it with the number of cases it declares.
fn render_spec(items: &[(u8, bool, bool)]) -> (String, usize) {
    let mut source = String::from("// generated\ndescribe('suite', () => {\n");
    let mut cases = 0;
    for (i, &(shape, trailing, blank)) in items.iter().enumerate() {
        if blank {
            source.push('\n');
        }
        let stmt = match shape {
            0 => {
                cases += 1;
                format!("it('case {}', () => {{\n    step({});\n  }});", i, i)
            }
            1 => {
                cases += 1;
                format!("it(\"case {}\", async function () {{ await step({}) }})", i, i)
            }
            2 => "beforeEach(() => setup());".to_string(),
            3 => format!("const value{} = [{}, {{ a: {} }}];", i, i, i),
            4 => format!("it.skip('skipped {}', noop)", i),
            _ => format!("// note {}\n  helper(`tpl ${{{}}}`)", i, i),
        };
        source.push_str("  ");
        source.push_str(&stmt);
        if trailing {
            source.push_str(" // tail");
        }
        source.push('\n');
    }
    source.push_str("});\n");
    (source, cases)
}

fn spec_strategy() -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec(item_strategy(), 0..12).prop_map(|items| render_spec(&items))
}

// =============================================================================
// Emission Properties
// =============================================================================

proptest! {
    /// Property: Rendering a tree without edits reproduces the source exactly
    #[test]
    fn unchanged_render_is_lossless((source, _) in spec_strategy()) {
        let tree = parser::parse_source(&source).expect("generated spec should parse");
        prop_assert_eq!(emit::render_unchanged(&tree), source);
    }

    /// Property: Arbitrary input never panics the lexer or parser
    #[test]
    fn parser_never_panics(source in "[ -~\n]{0,64}") {
        let _ = parser::parse_source(&source);
    }
}

// =============================================================================
// Partition Properties
// =============================================================================

proptest! {
    /// Property: One view per case; each keeps every non-case statement and exactly one case
    #[test]
    fn partition_keeps_one_case_per_view((source, expected_cases) in spec_strategy()) {
        let tree = parser::parse_source(&source).expect("generated spec should parse");
        let SpecShape::SingleGroup { group, cases } = locate::classify(&tree) else {
            panic!("generated spec should have one group");
        };
        prop_assert_eq!(cases.len(), expected_cases);

        let body = locate::group_body(&tree, group).expect("group should have a body");
        let children: Vec<_> = tree.children(body).collect();
        let views = partition::partition(&tree, group, &cases);
        prop_assert_eq!(views.len(), cases.len());

        for view in &views {
            let kept_cases: Vec<usize> = children
                .iter()
                .filter(|(index, id, _)| cases.contains(index) && view.edit.retains(*id))
                .map(|(index, _, _)| *index)
                .collect();
            prop_assert_eq!(kept_cases, vec![view.case_index]);

            for (index, id, _) in &children {
                if !cases.contains(index) {
                    prop_assert!(view.edit.retains(*id));
                }
            }

            // Retained statements stay in source order.
            let positions: Vec<usize> = view
                .edit
                .retained
                .iter()
                .map(|id| children.iter().position(|(_, child, _)| child == id).expect("retained id is a child"))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Property: Every generated file parses back to a group with exactly one case
    #[test]
    fn rendered_views_reparse_as_single_case((source, _) in spec_strategy()) {
        let tree = parser::parse_source(&source).expect("generated spec should parse");
        let SpecShape::SingleGroup { group, cases } = locate::classify(&tree) else {
            panic!("generated spec should have one group");
        };

        for view in partition::partition(&tree, group, &cases) {
            let text = emit::render(&tree, &[view.edit]);
            let reparsed = parser::parse_source(&text).expect("rendered view should parse");
            match locate::classify(&reparsed) {
                SpecShape::SingleGroup { cases, .. } => prop_assert_eq!(cases.len(), 1),
                other => panic!("unexpected shape {}", other),
            }
        }
    }
}
