//! Define the reserved words that matter for statement boundaries.
//!
//! This module is the single source of truth for the reserved words the structural parser cares about: a stable
//! identifier ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records spellings, categories, and the
//! line-break behavior of each word.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Words like `this`, `null`, or `true` are deliberately absent: they behave like plain identifiers for the purpose
//!   of finding statement ends.
//! - No reserved word can end an expression, so a line break after one never terminates a statement, except for the
//!   [`KeywordInfo::restricted`] words (`return`, `break`, `continue`, `throw`).
//!
//! ## Examples
//! ```rust
//! use specsplit_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("function"), Some(KeywordId::Function));
//! assert_eq!(keywords::as_str(KeywordId::Return), "return");
//! assert!(keywords::info_for(KeywordId::Return).restricted);
//! ```

/// Stable identifier for every reserved word the parser inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Statements / control flow
    If,
    Else,
    For,
    While,
    Do,
    With,
    Try,
    Catch,
    Finally,
    Switch,
    Case,
    Default,
    Return,
    Throw,
    Break,
    Continue,

    // Declarations
    Function,
    Async,
    Class,
    Extends,
    Const,
    Let,
    Var,

    // Modules
    Import,
    Export,

    // Word operators
    Typeof,
    Void,
    Delete,
    New,
    In,
    Of,
    Instanceof,
    Await,
    Yield,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Statement,
    Declaration,
    Module,
    Operator,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// A line break directly after this word ends the statement (`return\nx` is `return; x`).
    pub restricted: bool,
    /// The word can continue an expression from the previous line (`a\ninstanceof B`).
    pub continues_expression: bool,
}

/// Registry of all reserved words.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::If, "if", KeywordCategory::Statement),
    info(KeywordId::Else, "else", KeywordCategory::Statement),
    info(KeywordId::For, "for", KeywordCategory::Statement),
    info(KeywordId::While, "while", KeywordCategory::Statement),
    info(KeywordId::Do, "do", KeywordCategory::Statement),
    info(KeywordId::With, "with", KeywordCategory::Statement),
    info(KeywordId::Try, "try", KeywordCategory::Statement),
    info(KeywordId::Catch, "catch", KeywordCategory::Statement),
    info(KeywordId::Finally, "finally", KeywordCategory::Statement),
    info(KeywordId::Switch, "switch", KeywordCategory::Statement),
    info(KeywordId::Case, "case", KeywordCategory::Statement),
    info(KeywordId::Default, "default", KeywordCategory::Statement),
    restricted(KeywordId::Return, "return"),
    restricted(KeywordId::Throw, "throw"),
    restricted(KeywordId::Break, "break"),
    restricted(KeywordId::Continue, "continue"),
    info(KeywordId::Function, "function", KeywordCategory::Declaration),
    info(KeywordId::Async, "async", KeywordCategory::Declaration),
    info(KeywordId::Class, "class", KeywordCategory::Declaration),
    info(KeywordId::Extends, "extends", KeywordCategory::Declaration),
    info(KeywordId::Const, "const", KeywordCategory::Declaration),
    info(KeywordId::Let, "let", KeywordCategory::Declaration),
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
    info(KeywordId::Import, "import", KeywordCategory::Module),
    info(KeywordId::Export, "export", KeywordCategory::Module),
    info(KeywordId::Typeof, "typeof", KeywordCategory::Operator),
    info(KeywordId::Void, "void", KeywordCategory::Operator),
    info(KeywordId::Delete, "delete", KeywordCategory::Operator),
    info(KeywordId::New, "new", KeywordCategory::Operator),
    infix(KeywordId::In, "in"),
    infix(KeywordId::Of, "of"),
    infix(KeywordId::Instanceof, "instanceof"),
    info(KeywordId::Await, "await", KeywordCategory::Operator),
    info(KeywordId::Yield, "yield", KeywordCategory::Operator),
];

/// Return the canonical spelling for a reserved word.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a reserved word.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the full metadata entry for a reserved word.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("keyword info missing")
}

/// Resolve an identifier spelling to a reserved word, if any.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        restricted: false,
        continues_expression: false,
    }
}

const fn restricted(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category: KeywordCategory::Statement,
        restricted: true,
        continues_expression: false,
    }
}

const fn infix(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category: KeywordCategory::Operator,
        restricted: false,
        continues_expression: true,
    }
}
