// models/src/errors.rs

pub use thiserror::Error;

/// A validation error raised at the data-entry boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A numeric measurement fell outside its plausible range (inclusive bounds).
    #[error("{field} value {value} is outside the plausible range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A floating point measurement was NaN or infinite.
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
    /// A required text field was empty or whitespace.
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),
    /// An enum value could not be parsed from its textual name.
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
    /// An identifier could not be parsed.
    #[error("identifier '{0}' is invalid")]
    InvalidIdentifier(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;
