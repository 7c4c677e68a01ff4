#![forbid(unsafe_code)]
//! Spec file splitter for e2e browser test runners
//!
//! A spec file with a single top-level `describe` and many `it` cases runs as one scheduling unit.
//! This crate rewrites such a file into one file per case before the run, so the runner can
//! schedule every case on its own, and removes the generated files afterwards.
//!
//! Pipeline for one file:
//!
//! 1. `specsplit_syntax::parser` - structural parse into an arena of statements
//! 2. [`locate`] - find the group and its cases
//! 3. [`partition`] - one body edit per case
//! 4. [`emit`] - render each edit back to source
//!
//! [`orchestrator`] runs the pipeline over a resolved run plan and undoes it after the run.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod emit;
pub mod locate;
pub mod orchestrator;
pub mod partition;

pub use specsplit_syntax::{ast, diagnostics, lexer, parser};

pub use config::RunConfig;
pub use orchestrator::{CleanupReport, PreparedRun, RunPlan, SplitDiagnostic, SplitError, complete, prepare, run_with};
