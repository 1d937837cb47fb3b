//! Error types shared across the bind registry.

use thiserror::Error;

/// Errors raised by bind registry operations.
#[derive(Error, Debug)]
pub enum BindError {
    /// A referenced resource (consumer or repo/distributor) does not exist.
    #[error("Missing resource: {0}")]
    MissingResource(String),

    /// A caller-supplied value failed validation.
    ///
    /// Part of the shared error taxonomy; no bind operation currently
    /// raises it.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Underlying store failure.
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Record (de)serialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BindResult<T> = Result<T, BindError>;

impl BindError {
    /// True when the error names a resource that does not exist.
    pub fn is_missing_resource(&self) -> bool {
        matches!(self, BindError::MissingResource(_))
    }
}
