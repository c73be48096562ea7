//! Core error types for habitloom-core.
//!
//! This module defines the error hierarchy using thiserror. Validation and
//! not-found failures are rejected commands, never aborts; store failures
//! propagate unchanged from the storage layer.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitloom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Input validation errors
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Unknown habit id for an operation that requires one
    #[error("no habit with id '{0}'")]
    NotFound(String),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Habit name is empty after trimming
    #[error("habit name must not be empty")]
    EmptyName,

    /// Frequency string is not a known variant
    #[error("unknown frequency '{0}' (expected 'daily' or 'weekly')")]
    UnknownFrequency(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing database
    #[error("failed to open habit store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("habit store is locked")]
    Locked,

    /// Persisted habit data could not be decoded
    #[error("corrupt habit data: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, _msg) => {
                if code.code == rusqlite::ErrorCode::DatabaseLocked {
                    StoreError::Locked
                } else {
                    StoreError::QueryFailed(err.to_string())
                }
            }
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
