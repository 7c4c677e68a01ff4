//! Golden snapshot tests for generated spec files
//!
//! These tests split the spec files under `tests/split_fixtures/` and compare every generated file
//! against stored snapshots. This ensures changes to statement ownership (comments, blank lines,
//! trailing annotations) are reviewed and intentional.
//!
//! Run with: `cargo test --test split_snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;
use std::path::{Path, PathBuf};

use specsplit::orchestrator::{GeneratedSpec, SplitOutcome, split_source};

/// Load a fixture from the split_fixtures directory
fn load_fixture(name: &str) -> String {
    let path = format!("tests/split_fixtures/{}.spec.js", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path))
}

/// Split a fixture as if it lived at `<name>.spec.js`
fn split_fixture(name: &str) -> Vec<GeneratedSpec> {
    let path = PathBuf::from(format!("{}.spec.js", name));
    match split_source(&path, &load_fixture(name)).expect("fixture failed to parse") {
        SplitOutcome::Split(generated) => generated,
        other => panic!("expected {} to split, got {:?}", name, other),
    }
}

fn paths(generated: &[GeneratedSpec]) -> Vec<&Path> {
    generated.iter().map(|g| g.path.as_path()).collect()
}

#[test]
fn test_login_split() {
    let generated = split_fixture("login");
    assert_eq!(
        paths(&generated),
        vec![
            Path::new("login.spec.js.2.js"),
            Path::new("login.spec.js.3.js"),
            Path::new("login.spec.js.4.js")
        ]
    );
    insta::assert_snapshot!("login_case_2", generated[0].text);
    insta::assert_snapshot!("login_case_3", generated[1].text);
    insta::assert_snapshot!("login_case_4", generated[2].text);
}

#[test]
fn test_cart_split() {
    let generated = split_fixture("cart");
    assert_eq!(
        paths(&generated),
        vec![Path::new("cart.spec.js.2.js"), Path::new("cart.spec.js.4.js")]
    );
    insta::assert_snapshot!("cart_case_2", generated[0].text);
    insta::assert_snapshot!("cart_case_4", generated[1].text);
}

#[test]
fn test_multi_group_fixture_is_not_split() {
    let outcome = split_source(Path::new("suites.spec.js"), &load_fixture("suites")).unwrap();
    assert!(matches!(outcome, SplitOutcome::Unchanged(Some(_))));
}
