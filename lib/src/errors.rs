// lib/src/errors.rs

use thiserror::Error;

use models::errors::ValidationError;
use models::identifiers::PatientId;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Patient {0} was not found")]
    PatientNotFound(PatientId),

    #[error("Patient {0} has no triage assessment to override")]
    NoTriageRecord(PatientId),

    #[error("Store operation failed: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<::config::ConfigError> for TriageError {
    fn from(err: ::config::ConfigError) -> Self {
        TriageError::ConfigurationError(err.to_string())
    }
}

pub type TriageResult<T> = Result<T, TriageError>;
