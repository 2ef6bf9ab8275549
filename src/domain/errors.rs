//! # Domain Errors
//!
//! Outcome kinds for catalog operations. Transport status codes never
//! appear at this layer; the HTTP module owns that mapping.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for catalog operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Catalog operation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed the validity rule
    #[error("Invalid planet: {0}")]
    Validation(String),

    /// A uniqueness rule rejected the request
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The addressed record does not exist
    #[error("No planet with id {0}")]
    NotFound(i64),

    /// The store could not serve the request
    #[error("Store failure: {0}")]
    Store(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { .. } => DomainError::Conflict(err.to_string()),
            StoreError::ConstraintViolation(field) => {
                DomainError::Validation(format!("{field} must be non-empty"))
            }
            StoreError::NotFound(id) => DomainError::NotFound(id),
            StoreError::Unavailable(msg) => DomainError::Store(msg),
        }
    }
}
