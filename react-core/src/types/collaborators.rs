//! Traits for the host-framework services an action consumes.

use async_trait::async_trait;

use super::{message::RecentMessage, record::ActionRecord};
use crate::error::Result;

/// Recent-message retrieval from the host's message store.
#[async_trait]
pub trait RecentMessageSource: Send + Sync {
    /// Returns up to `limit` most recent messages of the chat, oldest first.
    async fn get_recent_messages(&self, chat_id: &str, limit: usize) -> Result<Vec<RecentMessage>>;
}

/// Persistence of action outcomes.
#[async_trait]
pub trait ActionRecorder: Send + Sync {
    async fn store_action_info(&self, record: ActionRecord) -> Result<()>;
}
