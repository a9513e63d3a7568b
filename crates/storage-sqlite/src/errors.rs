//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap Diesel-specific errors and convert
//! them to the store-agnostic error types defined in `fintrack_core`.

use diesel::result::Error as DieselError;
use fintrack_core::errors::{Error, StoreError};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel, r2d2 and rusqlite types.
///
/// These errors are internal to the storage layer and are converted to
/// `fintrack_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Backup failed: {0}")]
    BackupFailed(String),

    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Writer actor unavailable: {0}")]
    WriterUnavailable(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Core error: {0}")]
    CoreError(Error),
}

/// Convert core Error to StorageError (for write_actor transaction wrapper)
impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::CoreError(err)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::BackupFailed(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Store(StoreError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Store(StoreError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Store(StoreError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(e) => Error::Store(StoreError::QueryFailed(e.to_string())),
            StorageError::MigrationFailed(e) => Error::Store(StoreError::MigrationFailed(e)),
            StorageError::BackupFailed(e) => Error::Store(StoreError::BackupFailed(e)),
            StorageError::Io(e) => Error::Store(StoreError::Internal(e.to_string())),
            StorageError::WriterUnavailable(e) => Error::Store(StoreError::ConnectionFailed(e)),
            StorageError::SerializationError(e) => Error::Serialization(e.to_string()),
            StorageError::CoreError(e) => e,
        }
    }
}
