//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Input validation errors raised at the `add_record` boundary.
///
/// These are detected before any mutation occurs: a rejected add leaves the
/// ledger exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The amount field could not be parsed as a finite number
    #[error("'{0}' is not a valid amount")]
    NotANumber(String),

    /// A required field was empty after trimming
    #[error("{0} cannot be empty")]
    MissingField(&'static str),
}

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Backing-store read/write/delete failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ExpenseError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::NotANumber("abc".into());
        assert_eq!(err.to_string(), "'abc' is not a valid amount");

        let err = ValidationError::MissingField("Category");
        assert_eq!(err.to_string(), "Category cannot be empty");
    }

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Storage("test error".into());
        assert_eq!(err.to_string(), "Storage error: test error");
    }

    #[test]
    fn test_from_validation_error() {
        let err: ExpenseError = ValidationError::MissingField("Date").into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Date cannot be empty");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let expense_err: ExpenseError = io_err.into();
        assert!(matches!(expense_err, ExpenseError::Io(_)));
    }
}
