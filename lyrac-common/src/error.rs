//! Error handling for the Lyra JS backend
//!
//! This module defines the workspace-level error type and the diagnostic
//! reporting utilities used by the driver.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main compiler error type spanning all backend phases
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Lowering error: {message}")]
    LowerError { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Internal compiler error: {message}")]
    InternalError { message: String },
}

impl From<std::io::Error> for CompilerError {
    fn from(err: std::io::Error) -> Self {
        CompilerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<String> for CompilerError {
    fn from(message: String) -> Self {
        CompilerError::InternalError { message }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and optional notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: String) -> Self {
        Self {
            severity: Severity::Error,
            message,
            notes: Vec::new(),
        }
    }

    pub fn warning(message: String) -> Self {
        Self {
            severity: Severity::Warning,
            message,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;

        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }

        Ok(())
    }
}

/// Collects diagnostics for a compilation unit
#[derive(Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an error diagnostic
    pub fn error(&mut self, message: String) {
        self.diagnostics.push(Diagnostic::error(message));
        self.error_count += 1;
    }

    /// Report a warning diagnostic
    pub fn warning(&mut self, message: String) {
        self.diagnostics.push(Diagnostic::warning(message));
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Print all diagnostics to stderr
    pub fn print_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::error("bad expression".to_string());
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "bad expression");
        assert!(diag.notes.is_empty());
    }

    #[test]
    fn test_diagnostic_with_notes() {
        let diag = Diagnostic::error("bad expression".to_string())
            .with_note("while lowering call".to_string());
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(
            format!("{}", diag),
            "error: bad expression\n  note: while lowering call"
        );
    }

    #[test]
    fn test_error_reporter() {
        let mut reporter = ErrorReporter::new();
        assert!(!reporter.has_errors());

        reporter.warning("suspicious literal".to_string());
        assert!(!reporter.has_errors());

        reporter.error("lowering failed".to_string());
        assert!(reporter.has_errors());
        assert_eq!(reporter.error_count(), 1);
        assert_eq!(reporter.diagnostics().len(), 2);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CompilerError = io.into();
        assert!(matches!(err, CompilerError::IoError { .. }));
    }
}
