//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the
//! lexer/parser: delimiters, separators, access markers, and a few structural markers.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use specsplit_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("=>"), Some(PunctuationId::FatArrow));
//! assert_eq!(punctuation::as_str(PunctuationId::QuestionDot), "?.");
//! assert_eq!(punctuation::closing(PunctuationId::LBrace), Some(PunctuationId::RBrace));
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,` and `;`.
    Separator,
    /// Access markers like `.` and `?.`.
    Access,
    /// The arrow-function marker `=>`.
    Arrow,
    /// Misc markers like `?`, `:`, `...`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators / markers
    Semicolon,
    Comma,
    Colon,
    Question,

    // Access
    Dot,
    QuestionDot,

    // Arrow functions
    FatArrow,

    // Spread / rest
    Ellipsis,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Marker),
    info(PunctuationId::Question, "?", PunctuationCategory::Marker),
    info(PunctuationId::Dot, ".", PunctuationCategory::Access),
    info(PunctuationId::QuestionDot, "?.", PunctuationCategory::Access),
    info(PunctuationId::FatArrow, "=>", PunctuationCategory::Arrow),
    info(PunctuationId::Ellipsis, "...", PunctuationCategory::Marker),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Return the closing delimiter that pairs with an opening one.
pub fn closing(open: PunctuationId) -> Option<PunctuationId> {
    match open {
        PunctuationId::LParen => Some(PunctuationId::RParen),
        PunctuationId::LBracket => Some(PunctuationId::RBracket),
        PunctuationId::LBrace => Some(PunctuationId::RBrace),
        _ => None,
    }
}

/// Return `true` for `)`, `]`, and `}`.
pub fn is_closing(id: PunctuationId) -> bool {
    matches!(
        id,
        PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace
    )
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
