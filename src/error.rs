//! Custom error types for budget-grid
//!
//! This module defines the error hierarchy for the library using thiserror.
//! Lenient money parsing and best-effort document import never produce these
//! errors; they resolve to zero / "no data" instead.

use thiserror::Error;

/// The main error type for budget-grid operations
#[derive(Error, Debug)]
pub enum GridError {
    /// An argument was rejected before any state was touched
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl GridError {
    /// Create a "not found" error for an expense row
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for an (expense, period) cell
    pub fn cell_not_found(expense_id: &str, period_id: &str) -> Self {
        Self::NotFound {
            entity_type: "Cell",
            identifier: format!("[{}][{}]", expense_id, period_id),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-grid operations
pub type GridResult<T> = Result<T, GridError>;
