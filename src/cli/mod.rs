//! CLI module for testgen
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Flags
//!
//! - `--force` - Overwrite existing generated test files
//! - `-v, --verbose` - Report discovered solutions, skip reasons and failure causes
//! - `--root <DIR>` - Project root the default layout is resolved against
//! - `--specs <FILE>` - Read the spec table from a JSON file instead of the built-in one
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! `execute` returns `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.
//! Per-solution failures are reported, never turned into a failing exit code.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::GeneratorConfig;
use crate::pipeline::{Generator, RunOptions};
use crate::report::ConsoleReporter;
use crate::specs::SpecTable;
use crate::version::TESTGEN_VERSION;

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
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate test files for solved problems from the spec table
#[derive(Parser, Debug)]
#[command(name = "testgen")]
#[command(version = TESTGEN_VERSION)]
#[command(about = "Generate test files for solved problems", long_about = None)]
pub struct Cli {
    /// Force regeneration of existing test files
    #[arg(long)]
    pub force: bool,

    /// Print detailed output
    #[arg(short, long)]
    pub verbose: bool,

    /// Project root containing `solutions/src` and `solutions/tests`
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Spec table to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub specs: Option<PathBuf>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
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
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let specs = load_specs(&cli)?;
    let config = GeneratorConfig::for_project(&cli.root);
    tracing::debug!(?config, specs = specs.len(), "starting generation");

    let generator = Generator::new(config, specs);
    let mut reporter = ConsoleReporter::new(cli.verbose);
    generator.run(RunOptions { force: cli.force }, &mut reporter);

    Ok(ExitCode::SUCCESS)
}

fn load_specs(cli: &Cli) -> CliResult<SpecTable> {
    let table = match &cli.specs {
        Some(path) => SpecTable::from_path(path),
        None => SpecTable::builtin(),
    };
    table.map_err(|e| CliError::failure(format!("Error: {}", e)))
}

// ============================================================================
// Tests
// ============================================================================
