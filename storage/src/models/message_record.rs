//! Message record model for persistence.
//!
//! Maps to the `messages` table and is used by MessageRepository.

use chrono::{DateTime, Utc};
use react_core::RecentMessage;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: String,
    pub chat_id: String,
    /// Platform message id, as the gateway knows it.
    pub message_id: String,
    pub user_nickname: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl MessageRecord {
    /// Creates a new record with a generated UUID and current timestamp.
    pub fn new(
        chat_id: impl Into<String>,
        message_id: impl Into<String>,
        user_nickname: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            message_id: message_id.into(),
            user_nickname: user_nickname.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

impl From<MessageRecord> for RecentMessage {
    fn from(r: MessageRecord) -> Self {
        RecentMessage {
            message_id: r.message_id,
            user_nickname: r.user_nickname,
            time: r.created_at,
            processed_plain_text: r.content,
        }
    }
}
