//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; core errors are classified
//! into them when a command fails.

use std::fmt;

use travelog_core::TravelogError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Entry id matched nothing
    NotFound { message: String, hint: String },

    /// Rejected flag value or entry
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// Anything else (I/O, config parsing)
    Failed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a hint. `Failed` errors carry none.
    pub fn with_hint(self, text: impl Into<String>) -> Self {
        match self {
            CliError::NotFound { message, .. } => CliError::NotFound {
                message,
                hint: text.into(),
            },
            CliError::InvalidInput { message, .. } => CliError::InvalidInput {
                message,
                hint: Some(text.into()),
            },
            failed => failed,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CliError::NotFound { message, .. } | CliError::InvalidInput { message, .. } => message,
            CliError::Failed(message) => message,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::Failed(_) => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Failed(_) => exit_codes::FAILURE,
        }
    }

    /// Classify an error returned by a command.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        let err = match err.downcast::<CliError>() {
            Ok(cli) => return cli,
            Err(err) => err,
        };
        match err.downcast::<TravelogError>() {
            Ok(core) => Self::from(core),
            Err(other) => CliError::Failed(format!("{:#}", other)),
        }
    }
}

impl From<TravelogError> for CliError {
    fn from(err: TravelogError) -> Self {
        let message = err.to_string();
        match err {
            TravelogError::NotFound(_) => {
                CliError::not_found(message, "Run `travelog list` to see entry IDs.")
            }
            TravelogError::Validation(_) | TravelogError::InvalidInput(_) => {
                CliError::invalid_input(message)
            }
            _ => CliError::Failed(message),
        }
    }
}
