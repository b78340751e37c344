//! Error types for Travelog core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Travelog operations.
pub type Result<T> = std::result::Result<T, TravelogError>;

/// Core error type for Travelog operations.
#[derive(Debug, Error)]
pub enum TravelogError {
    /// A required field is missing or a value is out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation referenced an entry id that is not in the collection
    #[error("Not found: {0}")]
    NotFound(String),

    /// Mirror read or write failure
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl TravelogError {
    /// Whether this error is a missing-entry error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TravelogError::NotFound(_))
    }

    /// Whether this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, TravelogError::Validation(_))
    }
}

impl From<std::io::Error> for TravelogError {
    fn from(err: std::io::Error) -> Self {
        TravelogError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for TravelogError {
    fn from(err: serde_json::Error) -> Self {
        TravelogError::Persistence(err.to_string())
    }
}
