//! Custom error types for spenddash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Rule persistence deliberately does NOT surface errors through these types:
//! a missing or corrupt rules file degrades to defaults and a failed write is
//! swallowed (the in-memory rule stays authoritative). The variants here
//! cover everything else: bad CLI input, unreadable report files, export
//! failures.

use thiserror::Error;

/// The main error type for spenddash operations
#[derive(Error, Debug)]
pub enum SpendDashError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors in report input files (the collaborator envelope)
    #[error("Input error: {0}")]
    Input(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpendDashError {
    /// Create an input error for a file that could not be read or parsed
    pub fn bad_input(path: impl AsRef<std::path::Path>, detail: impl std::fmt::Display) -> Self {
        Self::Input(format!("{}: {}", path.as_ref().display(), detail))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendDashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendDashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spenddash operations
pub type SpendDashResult<T> = Result<T, SpendDashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendDashError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_bad_input_error() {
        let err = SpendDashError::bad_input("reports/2025.json", "unexpected end of file");
        assert_eq!(
            err.to_string(),
            "Input error: reports/2025.json: unexpected end of file"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let dash_err: SpendDashError = io_err.into();
        assert!(matches!(dash_err, SpendDashError::Io(_)));
    }

    #[test]
    fn test_is_validation() {
        assert!(SpendDashError::Validation("nope".into()).is_validation());
        assert!(!SpendDashError::Io("nope".into()).is_validation());
    }
}
