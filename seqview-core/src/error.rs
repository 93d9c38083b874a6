//! Error types for the geometry core

use thiserror::Error;

/// Errors raised while normalizing records or computing statistics
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GeometryError {
    pub fn invalid_record<S: Into<String>>(message: S) -> Self {
        Self::InvalidRecord(message.into())
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;
