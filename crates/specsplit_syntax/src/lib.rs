//! Structural syntax frontend for JavaScript test spec files: lexer, statement parser, arena AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the splitter and its debugging commands.
//!
//! ## Notes
//! - This crate is intentionally “statement-level”: it finds statement boundaries, call statements with a plain
//!   callee, and the block bodies of function arguments. It does not build expression trees.
//! - The tree is lossless: every statement records the byte range it owns in the source, so rendering the source
//!   from the tree reproduces it exactly.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `specsplit_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use specsplit_syntax::{lexer, parser};
//!
//! let source = "describe('A', () => {\n  it('a', () => {});\n});\n";
//! let tokens = lexer::lex(source).unwrap();
//! let tree = parser::parse(source, &tokens).unwrap();
//! assert_eq!(tree.root().stmts.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
