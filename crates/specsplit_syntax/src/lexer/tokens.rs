//! Token types for the spec file lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for symbol operators
//! - `Punctuation(PunctuationId)` for delimiters, separators and markers
//!
//! ## Notes
//! - Comments and whitespace are trivia and never become tokens. A token records whether a line break
//!   preceded it, which is all the parser needs for automatic semicolon insertion.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use specsplit_core::lang::keywords::{self, KeywordId};
use specsplit_core::lang::operators::OperatorId;
use specsplit_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Number,
    /// Quoted string; the payload is the raw text between the quotes.
    String(String),
    Template,
    Regex,

    // ========== Special ==========
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// A line terminator appears between the previous token and this one.
    pub newline_before: bool,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span, newline_before: bool) -> Self {
        Self {
            kind,
            span,
            newline_before,
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
