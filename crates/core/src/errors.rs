//! Core error types for the fintrack application.
//!
//! This module defines store-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the finance tracker.
///
/// Store-specific errors are wrapped in string form to keep this type
/// independent of any particular document store.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Document store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to convert document: {0}")]
    Serialization(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for document store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to establish a connection to the store.
    #[error("Failed to connect to document store: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create connection pool: {0}")]
    PoolCreationFailed(String),

    /// A read or write failed to execute.
    #[error("Document query failed: {0}")]
    QueryFailed(String),

    /// The requested document was not found.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The store rejected the operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Schema migration failed.
    #[error("Store migration failed: {0}")]
    MigrationFailed(String),

    /// Backup of the underlying database failed.
    #[error("Store backup failed: {0}")]
    BackupFailed(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invariant violated: {0}")]
    InvariantViolated(String),
}

impl Error {
    /// Returns true when the error is a missing-document error from the store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(StoreError::NotFound(_)))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
