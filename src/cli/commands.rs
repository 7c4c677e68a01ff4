//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::config::RunConfig;
use crate::locate::{self, SpecShape};
use crate::orchestrator::{self, GlobSpecResolver, PreparedRun, RunPlan, SplitError};
use specsplit_syntax::ast::{BodyId, SyntaxTree};
use specsplit_syntax::{diagnostics, lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum spec file size (10 MB).
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a source file with a size check.
///
/// ## Errors
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (10 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

fn load_config(config_path: &Path) -> CliResult<RunConfig> {
    Ok(RunConfig::load_from_path(config_path).map_err(SplitError::from)?)
}

fn parse_tree(file_path: &str, source: &str) -> CliResult<SyntaxTree> {
    parser::parse_source(source)
        .map_err(|errs| CliError::failure(diagnostics::format_errors(file_path, source, &errs).trim_end()))
}

fn print_plan(plan: &RunPlan) {
    for path in plan {
        println!("{}", path.display());
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::failure(format!("Error serializing output: {}", e)))
}

// ============================================================================
// Debug commands
// ============================================================================

/// Print the token stream of a file.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source)
        .map_err(|errs| CliError::failure(diagnostics::format_errors(file_path, &source, &errs).trim_end()))?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the statement outline of a file.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tree = parse_tree(file_path, &source)?;
    print!("{}", tree.outline());
    Ok(ExitCode::SUCCESS)
}

/// Print a file's shape and the titles of the cases it would be split into.
pub fn locate_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tree = parse_tree(file_path, &source)?;
    let shape = locate::classify(&tree);
    println!("{}", shape);

    if let SpecShape::SingleGroup { group, cases } = &shape {
        if let Some(body) = locate::group_body(&tree, *group) {
            for &case in cases {
                println!("  {}: {}", case, case_title(&tree, body, case));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn case_title(tree: &SyntaxTree, body: BodyId, case: usize) -> String {
    let Some(&id) = tree.body(body).stmts.get(case) else {
        return String::new();
    };
    let title = tree
        .stmt(id)
        .kind
        .as_call()
        .and_then(|call| call.args.first())
        .map(|arg| match &arg.string {
            Some(value) => format!("{:?}", value),
            None => tree.text(arg.span).to_string(),
        });
    title.unwrap_or_default()
}

// ============================================================================
// Hooks
// ============================================================================

/// `specsplit split`: prepare the run, persist its state, print the active plan.
///
/// Refuses to run while a state file from an earlier `split` is still in place.
pub fn split(config_path: &Path, state_path: &Path, json: bool) -> CliResult<ExitCode> {
    if state_path.exists() {
        return Err(CliError::failure(format!(
            "Error: state file '{}' already exists; run `specsplit cleanup` first",
            state_path.display()
        )));
    }
    let config = load_config(config_path)?;
    let resolver = GlobSpecResolver::for_config(&config);
    let prepared = orchestrator::prepare(&config, &resolver)?;

    if let Err(e) = prepared.save_state(state_path) {
        orchestrator::complete(prepared);
        return Err(e.into());
    }

    if json {
        println!("{}", to_json(&prepared)?);
    } else {
        print_plan(&prepared.active);
    }
    Ok(ExitCode::SUCCESS)
}

/// `specsplit cleanup`: delete what `split` generated, print the original plan.
pub fn cleanup(state_path: &Path, json: bool) -> CliResult<ExitCode> {
    let prepared = PreparedRun::load_state(state_path)?;
    let report = orchestrator::complete(prepared);

    if let Err(e) = fs::remove_file(state_path) {
        tracing::warn!(path = %state_path.display(), "failed to remove state file: {}", e);
    }

    if json {
        println!("{}", to_json(&report)?);
    } else {
        print_plan(&report.restored);
    }

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(format!(
            "Error: {} generated spec file(s) could not be deleted",
            report.failures.len()
        )))
    }
}

/// `specsplit run -- <command>`: split, run the command with the active plan, clean up.
///
/// Exits with the command's exit code. SIGINT, SIGTERM and SIGHUP do not stop `specsplit`: the
/// command (in the same process group) gets them, and cleanup runs once it exits.
pub fn run_command(config_path: &Path, command: &[String]) -> CliResult<ExitCode> {
    let Some((program, args)) = command.split_first() else {
        return Err(CliError::failure("Error: run requires a command"));
    };
    let config = load_config(config_path)?;
    let resolver = GlobSpecResolver::for_config(&config);

    if let Err(e) = ctrlc::set_handler(|| tracing::warn!("interrupted; cleaning up after the test command exits")) {
        tracing::warn!("failed to install interrupt handler: {}", e);
    }

    let (status, report) = orchestrator::run_with(&config, &resolver, |plan| {
        tracing::info!(program = %program, specs = plan.len(), "running test command");
        Command::new(program).args(args).args(plan.paths()).status()
    })?;

    if !report.is_clean() {
        tracing::warn!(failed = report.failures.len(), "some generated spec files were not deleted");
    }

    let status = status.map_err(|e| CliError::failure(format!("Error running '{}': {}", program, e)))?;
    match status.code() {
        Some(0) => Ok(ExitCode::SUCCESS),
        Some(code) => Ok(ExitCode(code)),
        None => Err(CliError::failure(format!("'{}' was terminated by a signal", program))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/definitely/not/here.spec.js").unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }

    #[test]
    fn test_case_title() {
        let tree = parser::parse_source("describe('A', () => {\n  it('first', f);\n  it(name, g);\n});\n").unwrap();
        let body = locate::group_body(&tree, 0).unwrap();
        assert_eq!(case_title(&tree, body, 0), "\"first\"");
        assert_eq!(case_title(&tree, body, 1), "name");
        assert_eq!(case_title(&tree, body, 5), "");
    }

    #[test]
    fn test_split_then_cleanup() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.spec.js"), "describe('A', () => {\n  it('x', f);\n  it('y', g);\n});\n").unwrap();
        let config_path = root.join("specsplit.json");
        RunConfig::new().with_specs(["*.spec.js"]).save_to_path(&config_path).unwrap();
        let state_path = root.join("state.json");

        assert_eq!(split(&config_path, &state_path, false).unwrap(), ExitCode::SUCCESS);
        assert!(root.join("a.spec.js.0.js").is_file());
        assert!(root.join("a.spec.js.1.js").is_file());
        assert!(state_path.is_file());

        assert_eq!(cleanup(&state_path, true).unwrap(), ExitCode::SUCCESS);
        assert!(!root.join("a.spec.js.0.js").exists());
        assert!(!state_path.exists());
        assert!(root.join("a.spec.js").is_file());
    }

    #[test]
    fn test_split_refuses_existing_state() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.spec.js"), "describe('A', () => {\n  it('x', f);\n  it('y', g);\n});\n").unwrap();
        let config_path = root.join("specsplit.json");
        RunConfig::new().with_specs(["*.spec.js"]).save_to_path(&config_path).unwrap();
        let state_path = root.join("state.json");

        split(&config_path, &state_path, false).unwrap();
        let first_state = fs::read_to_string(&state_path).unwrap();

        let err = split(&config_path, &state_path, false).unwrap_err();
        assert!(err.message.contains("already exists"), "{}", err.message);
        assert_eq!(fs::read_to_string(&state_path).unwrap(), first_state);
        assert!(!root.join("a.spec.js.0.js.0.js").exists());

        assert_eq!(cleanup(&state_path, false).unwrap(), ExitCode::SUCCESS);
        assert!(!root.join("a.spec.js.0.js").exists());
        assert!(!root.join("a.spec.js.1.js").exists());
    }

    #[test]
    fn test_cleanup_without_state_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = cleanup(&temp_dir.path().join("none.json"), false).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
