//! # Store Errors
//!
//! Error types for the persistence layer.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("Unique constraint violated on {field}: {value}")]
    UniqueViolation {
        field: &'static str,
        value: String,
    },

    /// A required field was empty
    #[error("Constraint violated: {0} must be non-empty")]
    ConstraintViolation(&'static str),

    /// No record with the given id
    #[error("No record with id {0}")]
    NotFound(i64),

    /// The backend could not serve the request
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create a unique violation for a field/value pair
    pub fn unique_violation(field: &'static str, value: impl Into<String>) -> Self {
        StoreError::UniqueViolation {
            field,
            value: value.into(),
        }
    }
}
