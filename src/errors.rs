use thiserror::Error;

use crate::config::exit;

/// Operational failures of the CLI. Validation failures are not errors; they
/// are returned as data by the validator.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid --today date '{0}', expected YYYY-MM-DD")]
    InvalidToday(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{0} already exists. Use --force to overwrite.")]
    AlreadyExists(String),

    #[error("Snapshot failed validation with {0} error(s)")]
    ValidationFailed(usize),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ValidationFailed(_) => exit::VALIDATION_FAILED,
            _ => exit::INPUT_ERROR,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
