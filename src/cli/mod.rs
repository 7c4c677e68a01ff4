//! CLI module for the spec splitter
//!
//! ## Commands
//!
//! - `split` - Pre-run hook: split spec files and print the active plan
//! - `cleanup` - Post-run hook: delete generated files and print the original plan
//! - `run -- <cmd>` - Split, run a test runner command with the active plan, clean up
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::orchestrator::DEFAULT_STATE_FILE;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<crate::orchestrator::SplitError> for CliError {
    fn from(err: crate::orchestrator::SplitError) -> Self {
        CliError::failure(err.render())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Split single-group spec files into one file per test case
#[derive(Parser, Debug)]
#[command(name = "specsplit")]
#[command(version = VERSION)]
#[command(about = "Split e2e spec files into one file per test case", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE")]
    pub lex_file: Option<PathBuf>,

    /// Print the statement outline (debug)
    #[arg(long = "parse", value_name = "FILE")]
    pub parse_file: Option<PathBuf>,

    /// Print the group/case layout (debug)
    #[arg(long = "locate", value_name = "FILE")]
    pub locate_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split spec files and print the active run plan
    Split {
        /// Run configuration file
        #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Where to record generated files for `cleanup`
        #[arg(long, value_name = "FILE", default_value = DEFAULT_STATE_FILE)]
        state: PathBuf,
        /// Print the prepared run as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete generated spec files and print the original run plan
    Cleanup {
        /// State file written by `split`
        #[arg(long, value_name = "FILE", default_value = DEFAULT_STATE_FILE)]
        state: PathBuf,
        /// Print the cleanup report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Split, run a command with the active plan appended, then clean up
    Run {
        /// Run configuration file
        #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Test runner command and its arguments
        #[arg(last = true, required = true, value_name = "COMMAND")]
        command: Vec<String>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.locate_file {
        return commands::locate_file(&file.to_string_lossy());
    }

    match cli.command {
        Some(Command::Split { config, state, json }) => commands::split(&config, &state, json),
        Some(Command::Cleanup { state, json }) => commands::cleanup(&state, json),
        Some(Command::Run { config, command }) => commands::run_command(&config, &command),
        None => Err(CliError::failure("Error: no command given (try `specsplit --help`)")),
    }
}

// ============================================================================
// Tests
// ============================================================================
