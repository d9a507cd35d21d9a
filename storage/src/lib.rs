//! Storage crate: message and action-record persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – MessageRecord, ActionRecordRow
//! - [`message_repo`] – MessageRepository (SQLite), also the [`react_core::RecentMessageSource`]
//!   and [`react_core::ActionRecorder`] used by standalone runs
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod message_repo;
mod models;
mod sqlite_pool;

pub use error::StorageError;
pub use message_repo::MessageRepository;
pub use models::{ActionRecordRow, MessageRecord};
pub use sqlite_pool::SqlitePoolManager;
