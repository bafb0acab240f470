//! Unified error handling for repository backends.
//!
//! Every repository operation returns [`AppResult`]. Backend failures are
//! wrapped without translation so callers see the store's own error.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Record not found: {0}")]
    NotFound(String),

    // Record construction
    #[error("{0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    // Setup
    #[error("Configuration error: {0}")]
    Config(String),

    // Backing store errors
    #[cfg(feature = "cache")]
    #[error("Document store error: {0}")]
    Cache(#[from] redis::RedisError),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get a stable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::InvalidRecord(_) => "INVALID_RECORD",
            AppError::Config(_) => "CONFIG_ERROR",
            #[cfg(feature = "cache")]
            AppError::Cache(_) => "STORE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error means the record simply isn't there
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Serialization(msg) => AppError::InvalidRecord(msg),
            DomainError::MissingIdentifier(msg) => AppError::InvalidRecord(msg),
            DomainError::NotFound(id) => AppError::NotFound(id),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, id: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(id.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(id: impl Into<String>) -> Self {
        AppError::NotFound(id.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
