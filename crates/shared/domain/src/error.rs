//! Domain-level errors.
//!
//! These errors describe records that cannot be built, read or addressed.
//! They are independent of the backing store.

use thiserror::Error;

/// Domain-specific errors for record construction and addressing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Record failed validation after construction
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record could not be converted to or from a field map
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Identifier field absent or not usable as a key
    #[error("Missing identifier: {0}")]
    MissingIdentifier(String),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        DomainError::Serialization(msg.into())
    }

    /// Create a missing identifier error
    pub fn missing_identifier(field: impl Into<String>) -> Self {
        DomainError::MissingIdentifier(field.into())
    }

    /// Create a not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound(id.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(err: validator::ValidationErrors) -> Self {
        DomainError::Validation(err.to_string())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
