//! Error types shared across the board

use thiserror::Error;

/// Base error type for the domain layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid job status: {0}")]
    InvalidStatus(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("record mapping error: {0}")]
    Mapping(String),
}

impl DomainError {
    pub fn missing_field(field: &str) -> Self {
        Self::Mapping(format!("missing required field '{}'", field))
    }

    pub fn empty_field(field: &str) -> Self {
        Self::Validation(format!("{} must not be empty", field))
    }
}
