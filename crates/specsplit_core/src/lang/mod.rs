//! Source-language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: test declaration keywords, reserved words,
//! operators, and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer, parser, and splitter.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `DeclarationKind`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use specsplit_core::lang::declarations::{self, DeclarationKind};
//! use specsplit_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(declarations::classify("Describe"), Some(DeclarationKind::Group));
//! ```

pub mod declarations;
pub mod keywords;
pub mod operators;
pub mod punctuation;
