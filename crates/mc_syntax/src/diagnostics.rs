//! Diagnostics and error reporting for the MC front end
//!
//! Every phase reports failures as a single [`CompileError`]. Compilation is fail-fast: the first error aborts
//! the whole run, so there is no error list and no warning tier.
//!
//! ## Notes
//! - [`ErrorKind`] is the closed error taxonomy: lexical, syntax, type, and name errors.
//! - [`CompileError::to_diagnostic`] turns an error into a `miette` diagnostic with the offending source line
//!   attached; rendering is left to the caller.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::location::{Location, SourceFile};

/// A compile-time error with location information
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Location,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

/// Result alias used by every phase.
pub type CompileResult<T> = Result<T, CompileError>;

impl CompileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            message: message.into(),
            location,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: impl Into<String>, location: Location) -> Self {
        Self::new(ErrorKind::Lexical, message, location)
    }

    pub fn syntax(message: impl Into<String>, location: Location) -> Self {
        Self::new(ErrorKind::Syntax, message, location)
    }

    pub fn type_error(message: impl Into<String>, location: Location) -> Self {
        Self::new(ErrorKind::Type, message, location)
    }

    pub fn name_error(message: impl Into<String>, location: Location) -> Self {
        Self::new(ErrorKind::Name, message, location)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Attach `source` and produce a renderable diagnostic.
    ///
    /// ## Notes
    /// - The label covers the single character at [`CompileError::location`].
    /// - Notes and hints are folded into the diagnostic's help text, one per line.
    pub fn to_diagnostic(&self, source: &SourceFile) -> SourceDiagnostic {
        let offset = source.offset_of(self.location);
        let len = usize::from(offset < source.text().len());
        let help = self
            .notes
            .iter()
            .map(|n| format!("note: {n}"))
            .chain(self.hints.iter().map(|h| format!("hint: {h}")))
            .collect::<Vec<_>>();

        SourceDiagnostic {
            kind: self.kind,
            message: self.message.clone(),
            source_code: NamedSource::new(source.path().display().to_string(), source.text().to_string()),
            span: (offset, len).into(),
            help: (!help.is_empty()).then(|| help.join("\n")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid character, malformed literal, or bad escape.
    Lexical,
    /// An expected token or construct was missing.
    Syntax,
    /// A type-category, arity, or conversion check failed.
    Type,
    /// An identifier was unresolved or redeclared.
    Name,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Type => write!(f, "type error"),
            ErrorKind::Name => write!(f, "name error"),
        }
    }
}

/// A [`CompileError`] bundled with its source text, ready for `miette` rendering.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind}: {message}")]
pub struct SourceDiagnostic {
    kind: ErrorKind,
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
}

// ============================================================================
// Error catalog: recurring errors with consistent wording
// ============================================================================

/// Constructors for the errors every phase reports.
pub mod errors {
    use super::*;

    pub fn unexpected_character(c: char, location: Location) -> CompileError {
        CompileError::lexical(format!("invalid character {:?}", c), location)
    }

    pub fn unterminated_literal(what: &str, location: Location) -> CompileError {
        CompileError::lexical(format!("unterminated {what} literal"), location)
            .with_hint("add the closing quote before the end of the line")
    }

    pub fn multi_line_literal(what: &str, location: Location) -> CompileError {
        CompileError::lexical(format!("invalid multi-line {what} literal"), location)
            .with_hint("use the `\\n` escape sequence for a newline")
    }

    pub fn invalid_escape(letter: char, location: Location) -> CompileError {
        CompileError::lexical(format!("invalid escape sequence '\\{letter}'"), location)
            .with_note("valid escapes are \\' \\\" \\\\ \\a \\b \\f \\n \\r \\t \\v")
    }

    pub fn unterminated_escape(location: Location) -> CompileError {
        CompileError::lexical("unterminated escape sequence", location)
    }

    /// A required token or construct was not found.
    pub fn expected(what: &str, found: &str, location: Location) -> CompileError {
        CompileError::syntax(format!("expected {what}, found {found}"), location)
    }

    pub fn nesting_too_deep(limit: usize, location: Location) -> CompileError {
        CompileError::syntax(format!("nesting too deep: more than {limit} levels"), location)
            .with_hint("split the construct into smaller declarations")
    }

    pub fn unknown_symbol(name: &str, location: Location) -> CompileError {
        CompileError::name_error(format!("no matching declaration for '{name}'"), location)
            .with_hint("declarations must appear before their first use")
    }

    pub fn redeclaration(name: &str, location: Location) -> CompileError {
        CompileError::name_error(format!("redeclaration of '{name}'"), location)
            .with_note("shadowing is only allowed in a nested scope")
    }

    /// An operand failed a category check (e.g. "expected an arithmetic operand").
    pub fn category_mismatch(expected: &str, found: &str, location: Location) -> CompileError {
        CompileError::type_error(format!("expected {expected}, found '{found}'"), location)
    }

    pub fn type_mismatch(expected: &str, found: &str, location: Location) -> CompileError {
        CompileError::type_error(
            format!("type mismatch: expected '{expected}', found '{found}'"),
            location,
        )
        .with_hint("use an explicit `as` conversion")
    }

    pub fn argument_count(expected: usize, found: usize, location: Location) -> CompileError {
        let message = if found > expected {
            format!("too many arguments: expected {expected}, found {found}")
        } else {
            format!("too few arguments: expected {expected}, found {found}")
        };
        CompileError::type_error(message, location)
    }

    pub fn no_common_type(left: &str, right: &str, location: Location) -> CompileError {
        CompileError::type_error(format!("no common type for '{left}' and '{right}'"), location)
    }

    pub fn cannot_convert(from: &str, to: &str, location: Location) -> CompileError {
        CompileError::type_error(format!("cannot convert '{from}' to '{to}'"), location)
    }
}
