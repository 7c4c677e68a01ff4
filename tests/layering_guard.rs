//! Layering guardrails to keep the syntax frontend free of filesystem and CLI concerns.
//!
//! `specsplit_core` and `specsplit_syntax` turn text into trees; resolving spec patterns, reading
//! config and parsing arguments belong to the root `specsplit` crate. This test scans the member
//! manifests and fails if one of those crates appears in their `[dependencies]`.

const ROOT_ONLY: &[&str] = &["glob", "serde_json", "clap", "tracing-subscriber", "tempfile"];

fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn frontend_crates_do_not_depend_on_root_only_crates() {
    let manifests = [
        ("specsplit_core", include_str!("../crates/specsplit_core/Cargo.toml")),
        ("specsplit_syntax", include_str!("../crates/specsplit_syntax/Cargo.toml")),
    ];

    for (crate_name, manifest) in manifests {
        for dep in dependency_names(manifest) {
            if ROOT_ONLY.contains(&dep.as_str()) {
                panic!("`{dep}` must not appear in {crate_name}'s [dependencies]; keep it in the root crate");
            }
        }
    }
}

#[test]
fn syntax_crate_depends_on_core() {
    let manifest = include_str!("../crates/specsplit_syntax/Cargo.toml");
    assert!(dependency_names(manifest).iter().any(|d| d == "specsplit_core"));
}
