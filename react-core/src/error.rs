//! Error types for action plugins.
//!
//! [`ReactError`] is the top-level error. Expected failures of an action (wrong chat type,
//! missing model config, failed model call) are not errors: they are reported through
//! [`crate::ActionOutcome`]. `ReactError` is for faults the action cannot turn into an outcome.

use thiserror::Error;

/// Top-level error for plugin actions and their collaborators.
#[derive(Error, Debug)]
pub enum ReactError {
    #[error("Database error: {0}")]
    Database(String),

    /// The model reply could not be turned into a usable selection (malformed JSON, missing or non-numeric fields).
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for core operations; uses [`ReactError`].
pub type Result<T> = std::result::Result<T, ReactError>;
