//! Splitting errors and diagnostics

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use specsplit_syntax::diagnostics::{self, CompileError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop plan preparation
#[derive(Debug, Error, miette::Diagnostic)]
pub enum SplitError {
    #[error("failed to parse spec file {path}: {} syntax error(s)", .errors.len())]
    #[diagnostic(code(specsplit::parse))]
    Parse {
        path: PathBuf,
        /// File contents, kept for rendering source snippets.
        text: String,
        errors: Vec<CompileError>,
    },

    #[error("failed to read spec file {path}: {source}")]
    #[diagnostic(code(specsplit::read))]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to write generated spec {path}: {source}")]
    #[diagnostic(code(specsplit::write))]
    Write { path: PathBuf, source: std::io::Error },

    #[error("failed to resolve spec patterns: {0}")]
    #[diagnostic(code(specsplit::resolve))]
    Resolve(String),

    #[error(transparent)]
    #[diagnostic(code(specsplit::config))]
    Config(#[from] ConfigError),

    #[error("state file {path}: {message}")]
    #[diagnostic(code(specsplit::state), help("run `specsplit split` to create a state file"))]
    State { path: PathBuf, message: String },
}

impl SplitError {
    /// User-facing rendering; parse errors include annotated source snippets.
    pub fn render(&self) -> String {
        match self {
            SplitError::Parse { path, text, errors } => {
                let file_name = path.to_string_lossy();
                format!("{}\n{}", self, diagnostics::format_errors(&file_name, text, errors).trim_end())
            }
            other => other.to_string(),
        }
    }
}

/// Non-fatal findings about a spec file; the file still runs, unsplit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SplitDiagnostic {
    /// More than one top-level group.
    UnsupportedShape { path: PathBuf, groups: usize },
    /// One group, but no case declarations directly inside it.
    NoCasesFound { path: PathBuf },
}

impl SplitDiagnostic {
    pub fn path(&self) -> &std::path::Path {
        match self {
            SplitDiagnostic::UnsupportedShape { path, .. } | SplitDiagnostic::NoCasesFound { path } => path,
        }
    }

    /// Return `true` if the diagnostic is reported as a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, SplitDiagnostic::UnsupportedShape { .. })
    }
}

impl std::fmt::Display for SplitDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitDiagnostic::UnsupportedShape { path, groups } => write!(
                f,
                "{} contains {} describe blocks and can't be split",
                path.display(),
                groups
            ),
            SplitDiagnostic::NoCasesFound { path } => {
                write!(f, "{} has no test cases to split", path.display())
            }
        }
    }
}
