//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Each command has a `*_source` twin that works on an in-memory [`SourceFile`] and returns the text to print,
//! so the output can be tested without touching the filesystem.

use std::fs;
use std::path::Path;

use crate::frontend::ast::dump;
use crate::frontend::diagnostics::CompileError;
use crate::frontend::interner::Interner;
use crate::frontend::lexer;
use crate::frontend::location::SourceFile;

use super::{CliError, CliResult, ExitCode};

/// Largest source file accepted (100 MB).
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file from disk.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<SourceFile> {
    let shown = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{shown}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    let text =
        fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{shown}': {e}")))?;
    Ok(SourceFile::new(file_path, text))
}

/// Render a compile error against its source with `miette`.
pub fn render_error(err: &CompileError, source: &SourceFile) -> String {
    tracing::debug!(kind = %err.kind, location = %err.location, "compilation failed");
    format!("{:?}", miette::Report::new(err.to_diagnostic(source)))
}

// ============================================================================
// Commands
// ============================================================================

/// Token stream in display form, one token per line, ending with end-of-input.
pub fn lex_source(source: &SourceFile) -> CliResult<String> {
    let mut interner = Interner::new();
    let tokens = lexer::lex(source.text(), &mut interner)
        .map_err(|err| CliError::failure(render_error(&err, source)))?;
    Ok(tokens.iter().map(|t| format!("{t}\n")).collect())
}

/// Indented dump of the typed program.
pub fn parse_source(source: &SourceFile) -> CliResult<String> {
    let mut interner = Interner::new();
    let program =
        crate::compile(source, &mut interner).map_err(|err| CliError::failure(render_error(&err, source)))?;
    Ok(dump(&program))
}

/// Analyze the program; the output is a one-line summary.
pub fn check_source(source: &SourceFile) -> CliResult<String> {
    let mut interner = Interner::new();
    let program =
        crate::compile(source, &mut interner).map_err(|err| CliError::failure(render_error(&err, source)))?;
    tracing::info!(
        path = %source.path().display(),
        declarations = program.declarations().len(),
        symbols = interner.len(),
        "check passed"
    );
    Ok(format!("{}: ok\n", source.path().display()))
}

/// Tokenize a file and print its tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    print!("{}", lex_source(&source)?);
    Ok(ExitCode::SUCCESS)
}

/// Parse and analyze a file, then print its typed tree.
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    print!("{}", parse_source(&source)?);
    Ok(ExitCode::SUCCESS)
}

/// Check a file.
pub fn check_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    print!("{}", check_source(&source)?);
    Ok(ExitCode::SUCCESS)
}
