//! Spec splitting orchestrator
//!
//! Two hooks around a test run, connected by an explicit value instead of shared configuration:
//!
//! - [`prepare`] (before the run): resolve the spec patterns, split every splittable file, write the
//!   generated files and return a [`PreparedRun`] whose active plan lists what the runner should
//!   execute.
//! - [`complete`] (after the run): delete exactly the files `prepare` wrote and hand back the
//!   original plan.
//!
//! [`run_with`] wraps both around a closure and guarantees the cleanup.
//!
//! ## Modules
//!
//! - `error` - SplitError and SplitDiagnostic
//! - `interfaces` - SpecResolver trait and the glob-based default
//! - `split` - Per-file parse/classify/partition/render
//! - `state` - Persisting a PreparedRun between CLI invocations

mod error;
pub mod interfaces;
pub mod split;
mod state;

pub use error::{SplitDiagnostic, SplitError};
pub use interfaces::{GlobSpecResolver, SpecResolver};
pub use split::{GeneratedSpec, SplitOutcome, generated_from, generated_path, split_source};
pub use state::DEFAULT_STATE_FILE;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::RunConfig;

// ============================================================================
// Run plan
// ============================================================================

/// Ordered spec file paths the runner executes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunPlan {
    specs: Vec<PathBuf>,
}

impl RunPlan {
    pub fn new(specs: Vec<PathBuf>) -> Self {
        Self { specs }
    }

    pub fn push(&mut self, path: PathBuf) {
        self.specs.push(path);
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.specs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.specs
    }
}

impl From<Vec<PathBuf>> for RunPlan {
    fn from(specs: Vec<PathBuf>) -> Self {
        Self::new(specs)
    }
}

impl<'a> IntoIterator for &'a RunPlan {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Prepared run / cleanup report
// ============================================================================

/// Result of the pre-run hook; consumed by [`complete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedRun {
    /// The resolved spec list before splitting; restored by [`complete`].
    pub original: RunPlan,
    /// What the runner should execute.
    pub active: RunPlan,
    /// Files written by [`prepare`]; the only files [`complete`] deletes.
    pub generated: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<SplitDiagnostic>,
}

/// A generated file that could not be deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Result of the post-run hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    /// The plan as it was before splitting.
    pub restored: RunPlan,
    pub removed: Vec<PathBuf>,
    pub failures: Vec<CleanupFailure>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

// ============================================================================
// Hooks
// ============================================================================

/// Pre-run hook: resolve, split and write.
///
/// Multi-group files and files without groups or cases are passed through unchanged. A multi-group
/// file is also reported with `tracing::warn!` and a [`SplitDiagnostic::UnsupportedShape`].
///
/// Generated files left behind by an interrupted run are skipped while their spec file exists.
///
/// ## Errors
/// Resolution, read, parse and write failures stop preparation. Generated files written before the
/// failure are deleted first.
#[tracing::instrument(skip_all, fields(patterns = config.specs.len()))]
pub fn prepare(config: &RunConfig, resolver: &dyn SpecResolver) -> Result<PreparedRun, SplitError> {
    let resolved = resolver.resolve(&config.specs, &config.exclude)?;
    let original = RunPlan::new(resolved.into_iter().filter(|path| !is_leftover(path)).collect());
    let mut run = PreparedRun::default();

    for path in &original {
        if let Err(e) = prepare_file(path, &mut run) {
            rollback(&run.generated);
            return Err(e);
        }
    }

    tracing::info!(
        specs = original.len(),
        active = run.active.len(),
        generated = run.generated.len(),
        "prepared run plan"
    );
    run.original = original;
    Ok(run)
}

fn is_leftover(path: &Path) -> bool {
    match generated_from(path) {
        Some(source) if source.is_file() => {
            tracing::warn!(
                path = %path.display(),
                source = %source.display(),
                "skipping generated spec left over from an earlier run"
            );
            true
        }
        _ => false,
    }
}

fn prepare_file(path: &Path, run: &mut PreparedRun) -> Result<(), SplitError> {
    let text = fs::read_to_string(path).map_err(|source| SplitError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match split_source(path, &text)? {
        SplitOutcome::Split(specs) => {
            for spec in specs {
                write_generated(&spec)?;
                run.generated.push(spec.path.clone());
                run.active.push(spec.path);
            }
        }
        SplitOutcome::Unchanged(diagnostic) => {
            if let Some(diagnostic) = diagnostic {
                if diagnostic.is_warning() {
                    tracing::warn!(path = %path.display(), "{}", diagnostic);
                } else {
                    tracing::debug!(path = %path.display(), "{}", diagnostic);
                }
                run.diagnostics.push(diagnostic);
            }
            run.active.push(path.to_path_buf());
        }
    }
    Ok(())
}

fn write_generated(spec: &GeneratedSpec) -> Result<(), SplitError> {
    let write_error = |source| SplitError::Write {
        path: spec.path.clone(),
        source,
    };
    if let Some(parent) = spec.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(&spec.path, &spec.text).map_err(write_error)?;
    tracing::debug!(path = %spec.path.display(), case = spec.case_index, "wrote generated spec");
    Ok(())
}

/// Best-effort deletion of files written by a failed `prepare`.
fn rollback(generated: &[PathBuf]) {
    let (_, failures) = remove_files(generated);
    for failure in failures {
        tracing::warn!(path = %failure.path.display(), "rollback failed: {}", failure.message);
    }
}

/// Delete `paths`; already missing files count as neither removed nor failed.
fn remove_files(paths: &[PathBuf]) -> (Vec<PathBuf>, Vec<CleanupFailure>) {
    let mut removed = Vec::new();
    let mut failures = Vec::new();
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => removed.push(path.clone()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "generated spec already gone");
            }
            Err(e) => failures.push(CleanupFailure {
                path: path.clone(),
                message: e.to_string(),
            }),
        }
    }
    (removed, failures)
}

/// Post-run hook: delete generated files and restore the original plan.
///
/// Deletion failures are logged and reported, never escalated.
#[tracing::instrument(skip_all, fields(generated = prepared.generated.len()))]
pub fn complete(prepared: PreparedRun) -> CleanupReport {
    let (removed, failures) = remove_files(&prepared.generated);
    for failure in &failures {
        tracing::warn!(path = %failure.path.display(), "failed to delete generated spec: {}", failure.message);
    }
    tracing::info!(removed = removed.len(), failed = failures.len(), "restored run plan");
    CleanupReport {
        restored: prepared.original,
        removed,
        failures,
    }
}

/// Calls [`complete`] when dropped, so cleanup also runs if the run closure panics.
struct CleanupGuard(Option<PreparedRun>);

impl CleanupGuard {
    fn finish(mut self) -> CleanupReport {
        self.0.take().map(complete).unwrap_or_default()
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Some(prepared) = self.0.take() {
            complete(prepared);
        }
    }
}

/// Prepare, run `f` with the active plan, then always clean up.
///
/// ## Errors
/// Only preparation errors; `f`'s outcome is returned as is.
pub fn run_with<T, F>(config: &RunConfig, resolver: &dyn SpecResolver, f: F) -> Result<(T, CleanupReport), SplitError>
where
    F: FnOnce(&RunPlan) -> T,
{
    let prepared = prepare(config, resolver)?;
    let active = prepared.active.clone();
    let guard = CleanupGuard(Some(prepared));
    let output = f(&active);
    let report = guard.finish();
    Ok((output, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const THREE_CASES: &str = "describe('A', () => {\n  it('a', fa);\n  it('b', fb);\n  it('c', fc);\n});\n";

    /// Resolver that returns a fixed list.
    struct FixedResolver(Vec<PathBuf>);

    impl SpecResolver for FixedResolver {
        fn resolve(&self, _specs: &[String], _exclude: &[String]) -> Result<Vec<PathBuf>, SplitError> {
            Ok(self.0.clone())
        }
    }

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_prepare_and_complete() {
        let temp_dir = TempDir::new().unwrap();
        let split = write(temp_dir.path(), "split.js", THREE_CASES);
        let multi = write(temp_dir.path(), "multi.js", "describe('A', () => {})\ndescribe('B', () => {})\n");
        let resolver = FixedResolver(vec![split.clone(), multi.clone()]);

        let run = prepare(&RunConfig::new(), &resolver).unwrap();
        assert_eq!(run.original.paths(), &[split.clone(), multi.clone()]);
        assert_eq!(
            run.active.paths(),
            &[
                temp_dir.path().join("split.js.0.js"),
                temp_dir.path().join("split.js.1.js"),
                temp_dir.path().join("split.js.2.js"),
                multi.clone()
            ]
        );
        assert_eq!(run.generated.len(), 3);
        assert!(run.generated.iter().all(|p| p.is_file()));
        assert_eq!(run.diagnostics.len(), 1);
        assert!(run.diagnostics[0].is_warning());

        let generated = run.generated.clone();
        let report = complete(run);
        assert!(report.is_clean());
        assert_eq!(report.removed, generated);
        assert_eq!(report.restored.paths(), &[split.clone(), multi.clone()]);
        assert!(generated.iter().all(|p| !p.exists()));
        assert!(split.is_file() && multi.is_file(), "originals are never deleted");
    }

    #[test]
    fn test_prepare_rolls_back_on_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let good = write(temp_dir.path(), "good.js", THREE_CASES);
        let bad = write(temp_dir.path(), "bad.js", "describe('A', () => {\n");
        let resolver = FixedResolver(vec![good, bad]);

        let err = prepare(&RunConfig::new(), &resolver).unwrap_err();
        assert!(matches!(err, SplitError::Parse { .. }));
        for i in 0..3 {
            assert!(!temp_dir.path().join(format!("good.js.{}.js", i)).exists());
        }
    }

    #[test]
    fn test_prepare_skips_leftover_generated_files() {
        let temp_dir = TempDir::new().unwrap();
        let split = write(temp_dir.path(), "split.js", THREE_CASES);
        let leftover = write(temp_dir.path(), "split.js.0.js", "describe('A', () => {\n  it('a', fa);\n});\n");
        let orphan = write(temp_dir.path(), "gone.js.1.js", "module.exports = {};\n");
        let resolver = FixedResolver(vec![split.clone(), leftover.clone(), orphan.clone()]);

        let run = prepare(&RunConfig::new(), &resolver).unwrap();
        assert_eq!(run.original.paths(), &[split.clone(), orphan.clone()], "only leftovers of existing specs are skipped");
        assert_eq!(run.generated.len(), 3);
        assert!(!run.active.iter().any(|p| p.to_string_lossy().contains(".0.js.0.js")));
        assert_eq!(fs::read_to_string(&leftover).unwrap(), "describe('A', () => {\n  it('a', fa);\n});\n");

        complete(run);
        assert!(!leftover.exists(), "the regenerated file is cleaned up with the others");
        assert!(split.is_file() && orphan.is_file());
    }

    #[test]
    fn test_prepare_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = FixedResolver(vec![temp_dir.path().join("gone.js")]);
        let err = prepare(&RunConfig::new(), &resolver).unwrap_err();
        assert!(matches!(err, SplitError::Read { .. }));
    }

    #[test]
    fn test_complete_tolerates_missing_files() {
        let prepared = PreparedRun {
            original: RunPlan::new(vec![PathBuf::from("a.js")]),
            active: RunPlan::new(vec![PathBuf::from("a.js.0.js")]),
            generated: vec![PathBuf::from("/definitely/not/here/a.js.0.js")],
            diagnostics: Vec::new(),
        };
        let report = complete(prepared);
        assert!(report.is_clean());
        assert!(report.removed.is_empty());
        assert_eq!(report.restored.paths(), &[PathBuf::from("a.js")]);
    }

    #[test]
    fn test_run_with_cleans_up_after_closure() {
        let temp_dir = TempDir::new().unwrap();
        let split = write(temp_dir.path(), "split.js", THREE_CASES);
        let resolver = FixedResolver(vec![split.clone()]);

        let (seen, report) = run_with(&RunConfig::new(), &resolver, |plan| {
            assert!(plan.iter().all(|p| p.is_file()));
            plan.len()
        })
        .unwrap();
        assert_eq!(seen, 3);
        assert_eq!(report.removed.len(), 3);
        assert_eq!(report.restored.paths(), &[split]);
        assert!(!temp_dir.path().join("split.js.0.js").exists());
    }

    #[test]
    fn test_run_with_cleans_up_on_panic() {
        let temp_dir = TempDir::new().unwrap();
        let split = write(temp_dir.path(), "split.js", THREE_CASES);
        let resolver = FixedResolver(vec![split]);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = run_with(&RunConfig::new(), &resolver, |_| panic!("runner crashed"));
        }));
        assert!(result.is_err());
        assert!(!temp_dir.path().join("split.js.0.js").exists());
    }
}
