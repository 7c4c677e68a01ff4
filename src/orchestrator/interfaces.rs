//! Spec resolution boundary
//!
//! Turning `{specs, exclude}` patterns into concrete file paths is the host runner's job; this
//! trait keeps it replaceable. [`GlobSpecResolver`] is the filesystem implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::SplitError;

// ============================================================================
// Spec Resolver Interface
// ============================================================================

/// Resolve spec patterns to an ordered, de-duplicated list of files.
pub trait SpecResolver {
    fn resolve(&self, specs: &[String], exclude: &[String]) -> Result<Vec<PathBuf>, SplitError>;
}

// ============================================================================
// Default Implementation
// ============================================================================

/// Glob-based resolution relative to a base directory.
///
/// ## Notes
/// - Matches are collected in pattern order; within one pattern, in the glob crate's
///   (alphabetical) order. A path matched by several patterns appears once, at its first match.
/// - Only regular files are returned.
/// - A spec without glob metacharacters is a literal path; a missing file is logged and skipped.
/// - An exclude entry with glob metacharacters is a glob (tried against the absolute and the
///   base-relative path); any other entry is a substring of the path (`/node_modules/`).
#[derive(Debug, Clone)]
pub struct GlobSpecResolver {
    base_dir: PathBuf,
}

impl GlobSpecResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolver rooted at the config's base directory.
    pub fn for_config(config: &crate::config::RunConfig) -> Self {
        Self::new(config.base_dir())
    }

    fn absolutize(&self, pattern: &str) -> PathBuf {
        let path = Path::new(pattern);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl Default for GlobSpecResolver {
    fn default() -> Self {
        Self::new(".")
    }
}

impl SpecResolver for GlobSpecResolver {
    fn resolve(&self, specs: &[String], exclude: &[String]) -> Result<Vec<PathBuf>, SplitError> {
        let excludes = ExcludeSet::new(&self.base_dir, exclude)?;
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();

        for spec in specs {
            let matches = if has_glob_meta(spec) {
                self.expand(spec)?
            } else {
                let path = self.absolutize(spec);
                if path.is_file() {
                    vec![path]
                } else {
                    tracing::warn!(spec = %spec, "spec file not found");
                    Vec::new()
                }
            };

            for path in matches {
                if excludes.matches(&path) {
                    tracing::debug!(path = %path.display(), "excluded");
                    continue;
                }
                if seen.insert(path.clone()) {
                    resolved.push(path);
                }
            }
        }

        Ok(resolved)
    }
}

impl GlobSpecResolver {
    fn expand(&self, spec: &str) -> Result<Vec<PathBuf>, SplitError> {
        let pattern = self.absolutize(spec);
        let pattern = pattern.to_string_lossy();
        let paths = glob::glob(&pattern)
            .map_err(|e| SplitError::Resolve(format!("invalid spec pattern `{}`: {}", spec, e)))?;

        let mut files = Vec::new();
        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "skipping unreadable path"),
            }
        }
        if files.is_empty() {
            tracing::debug!(spec = %spec, "pattern matched no files");
        }
        Ok(files)
    }
}

/// Return `true` if `pattern` uses glob syntax.
fn has_glob_meta(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Compiled exclude entries.
struct ExcludeSet<'a> {
    base_dir: &'a Path,
    patterns: Vec<glob::Pattern>,
    fragments: Vec<&'a str>,
}

impl<'a> ExcludeSet<'a> {
    fn new(base_dir: &'a Path, exclude: &'a [String]) -> Result<Self, SplitError> {
        let mut patterns = Vec::new();
        let mut fragments = Vec::new();
        for entry in exclude {
            if has_glob_meta(entry) {
                let pattern = glob::Pattern::new(entry)
                    .map_err(|e| SplitError::Resolve(format!("invalid exclude pattern `{}`: {}", entry, e)))?;
                patterns.push(pattern);
            } else if !entry.is_empty() {
                fragments.push(entry.as_str());
            }
        }
        Ok(Self {
            base_dir,
            patterns,
            fragments,
        })
    }

    fn matches(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(self.base_dir).unwrap_or(path);
        if self
            .patterns
            .iter()
            .any(|p| p.matches_path(path) || p.matches_path(relative))
        {
            return true;
        }
        let text = path.to_string_lossy().replace('\\', "/");
        self.fragments.iter().any(|fragment| text.contains(fragment))
    }
}
