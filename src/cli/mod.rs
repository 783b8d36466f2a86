//! CLI module for the MC compiler
//!
//! This module provides the command-line interface for the front end.
//!
//! ## Usage
//!
//! - `mcc <file>` - Check a file (lex, parse, analyze)
//! - `mcc --lex <file>` - Print the token stream, one token per line
//! - `mcc --parse <file>` - Print the typed tree
//! - `mcc --check <file>` - Check a file and report `ok`
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

use std::path::PathBuf;
use std::process;

use clap::Parser;
use thiserror::Error;

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
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The MC compiler front end
#[derive(Parser, Debug)]
#[command(name = "mcc")]
#[command(version = VERSION)]
#[command(about = "Lexer, parser and semantic analyzer for the MC language", long_about = None)]
pub struct Cli {
    /// File to check (default action)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse and print the typed tree (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Check only (debug)
    #[arg(long = "check", value_name = "FILE", conflicts_with = "file")]
    pub check_file: Option<PathBuf>,
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
            if exit_code != ExitCode::SUCCESS {
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
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file);
    }
    if let Some(file) = cli.check_file {
        return commands::check_file(&file);
    }

    match cli.file {
        Some(file) => commands::check_file(&file),
        None => Err(CliError::failure("no input file (try `mcc --help`)")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["mcc", "prog.mc"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("prog.mc")));
        assert!(cli.lex_file.is_none());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["mcc", "--lex", "test.mc"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["mcc", "--parse", "test.mc"]).unwrap();
        assert!(cli.parse_file.is_some());

        let cli = Cli::try_parse_from(["mcc", "--check", "test.mc"]).unwrap();
        assert!(cli.check_file.is_some());
    }

    #[test]
    fn test_cli_debug_flag_conflicts_with_file() {
        assert!(Cli::try_parse_from(["mcc", "--lex", "a.mc", "b.mc"]).is_err());
    }

    #[test]
    fn test_execute_without_file_fails() {
        let cli = Cli::try_parse_from(["mcc"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
