//! Structural parser for JavaScript spec files
//!
//! Converts a token stream into a [`SyntaxTree`]: an arena of statements with lossless source spans.
//! Only statement boundaries are recovered, plus call statements of the form `name(args...)` whose
//! function-literal arguments have their block bodies parsed recursively.
//!
//! ## Examples
//!
//! ```rust
//! use specsplit_syntax::{lexer, parser};
//!
//! let source = "const a = 1\nit('works', () => {\n  expect(a).toBe(1);\n});\n";
//! let tokens = lexer::lex(source).unwrap();
//! let tree = parser::parse(source, &tokens).unwrap();
//! assert_eq!(tree.root().stmts.len(), 2);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use specsplit_core::lang::keywords::{self, KeywordId};
use specsplit_core::lang::operators::OperatorId;
use specsplit_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/delimiters.rs");
include!("parser/stmts.rs");
include!("parser/calls.rs");
include!("parser/trivia.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
