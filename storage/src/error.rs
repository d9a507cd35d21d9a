//! Storage error types.
//!
//! Used by repository implementations and callers of storage APIs.

use react_core::ReactError;
use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Corrupt record {id}: {reason}")]
    Corrupt { id: String, reason: String },
}

impl From<StorageError> for ReactError {
    fn from(e: StorageError) -> Self {
        ReactError::Database(e.to_string())
    }
}
