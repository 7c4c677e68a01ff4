//! Per-file splitting
//!
//! Pure text-to-text step of the orchestrator: parse one spec file, classify its shape and render
//! one generated spec per case. Nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use specsplit_syntax::parser;

use super::{SplitDiagnostic, SplitError};
use crate::locate::{self, SpecShape};
use crate::{emit, partition};

/// Extension used when the original path has none.
pub const DEFAULT_EXTENSION: &str = "js";

/// A single-case file derived from a spec file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSpec {
    /// The spec file this was split from.
    pub original: PathBuf,
    /// Index of the kept case within the group body.
    pub case_index: usize,
    /// Where the file is written: `<original>.<case_index>.<ext>`.
    pub path: PathBuf,
    pub text: String,
}

/// What splitting one file produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    /// One generated spec per case, in case order.
    Split(Vec<GeneratedSpec>),
    /// The file runs as is, with the reason when it is not a plain no-group file.
    Unchanged(Option<SplitDiagnostic>),
}

/// Path of the generated file for `case_index`: `<original>.<case_index>.<ext>`.
///
/// `ext` is the original's extension, or [`DEFAULT_EXTENSION`] when it has none.
pub fn generated_path(original: &Path, case_index: usize) -> PathBuf {
    let ext = original
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_EXTENSION);
    let mut name = original.as_os_str().to_os_string();
    name.push(format!(".{}.{}", case_index, ext));
    PathBuf::from(name)
}

/// The spec file `path` is generated from, if its name has the [`generated_path`] shape.
pub fn generated_from(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let (rest, _ext) = name.rsplit_once('.')?;
    let (original, index) = rest.rsplit_once('.')?;
    if original.is_empty() || index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let case_index = index.parse().ok()?;
    let original = path.with_file_name(original);
    (generated_path(&original, case_index) == path).then_some(original)
}

/// Split the contents of one spec file.
///
/// ## Errors
/// Returns [`SplitError::Parse`] if the file does not parse.
pub fn split_source(path: &Path, text: &str) -> Result<SplitOutcome, SplitError> {
    let tree = parser::parse_source(text).map_err(|errors| SplitError::Parse {
        path: path.to_path_buf(),
        text: text.to_string(),
        errors,
    })?;

    let shape = locate::classify(&tree);
    tracing::debug!(path = %path.display(), shape = %shape, "classified spec file");

    match shape {
        SpecShape::NoGroup => Ok(SplitOutcome::Unchanged(None)),
        SpecShape::MultiGroup { groups } => Ok(SplitOutcome::Unchanged(Some(SplitDiagnostic::UnsupportedShape {
            path: path.to_path_buf(),
            groups: groups.len(),
        }))),
        SpecShape::SingleGroup { cases, .. } if cases.is_empty() => {
            Ok(SplitOutcome::Unchanged(Some(SplitDiagnostic::NoCasesFound {
                path: path.to_path_buf(),
            })))
        }
        SpecShape::SingleGroup { group, cases } => {
            let generated = partition::partition(&tree, group, &cases)
                .into_iter()
                .map(|part| GeneratedSpec {
                    original: path.to_path_buf(),
                    case_index: part.case_index,
                    path: generated_path(path, part.case_index),
                    text: emit::render(&tree, &[part.edit]),
                })
                .collect();
            Ok(SplitOutcome::Split(generated))
        }
    }
}
