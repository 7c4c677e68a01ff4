//! Test declaration vocabulary.
//!
//! The splitter recognizes two kinds of test declarations by the name of the function they call:
//! a test *group* (`describe(...)`) and a test *case* (`it(...)`). Recognition is purely by spelling;
//! nothing checks that the callee really is the test framework's function.
//!
//! ## Notes
//! - Matching is **case-insensitive** (`Describe(...)` and `IT(...)` qualify).
//! - [`DECLARATIONS`] together with [`classify`] is the single place to change when the test framework's declaration
//!   keywords change; everything else works with [`DeclarationKind`].
//!
//! ## Examples
//! ```rust
//! use specsplit_core::lang::declarations::{self, DeclarationKind};
//!
//! assert_eq!(declarations::classify("describe"), Some(DeclarationKind::Group));
//! assert_eq!(declarations::classify("IT"), Some(DeclarationKind::Case));
//! assert_eq!(declarations::classify("context"), None);
//! assert!(declarations::is(DeclarationKind::Case, "It"));
//! ```

/// Kind of test declaration a call statement may represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// A grouping construct containing test cases.
    Group,
    /// A single named test within a group.
    Case,
}

/// Metadata for a test declaration keyword.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationInfo {
    pub kind: DeclarationKind,
    /// Lower-case spelling compared against the lower-cased callee name.
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of recognized test declaration keywords.
pub const DECLARATIONS: &[DeclarationInfo] = &[
    DeclarationInfo {
        kind: DeclarationKind::Group,
        canonical: "describe",
        description: "Test group: a named block containing test cases",
    },
    DeclarationInfo {
        kind: DeclarationKind::Case,
        canonical: "it",
        description: "Test case: a single named test within a group",
    },
];

/// Return the canonical spelling for a declaration kind.
pub fn as_str(kind: DeclarationKind) -> &'static str {
    info_for(kind).canonical
}

/// Return the full metadata entry for a declaration kind.
///
/// ## Panics
/// - If the registry is missing an entry for `kind` (this indicates a programming error).
pub fn info_for(kind: DeclarationKind) -> &'static DeclarationInfo {
    DECLARATIONS
        .iter()
        .find(|d| d.kind == kind)
        .expect("declaration info missing")
}

/// Classify a callee name as a test declaration.
///
/// ## Notes
/// - The comparison lower-cases `name` and compares it to the canonical spelling.
pub fn classify(name: &str) -> Option<DeclarationKind> {
    let lowered = name.to_lowercase();
    DECLARATIONS
        .iter()
        .find(|d| d.canonical == lowered)
        .map(|d| d.kind)
}

/// Return `true` if `name` declares a test of the given `kind`.
pub fn is(kind: DeclarationKind, name: &str) -> bool {
    classify(name) == Some(kind)
}
