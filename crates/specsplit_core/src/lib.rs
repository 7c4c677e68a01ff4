//! Provide the canonical source-language vocabulary shared by the specsplit syntax frontend and the splitter.
//!
//! This crate is intentionally small and dependency-light.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no AST types.
//! - Current scope: test declaration keywords (`describe` / `it`), reserved words that influence statement
//!   boundaries, punctuation, and operator spellings.

pub mod lang;
