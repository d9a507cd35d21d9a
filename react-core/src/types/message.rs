//! Read-only projection of a stored chat message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recent message as the message store exposes it to plugins. Plugins only read these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentMessage {
    /// Platform message id (what the gateway expects when reacting).
    pub message_id: String,
    pub user_nickname: String,
    pub time: DateTime<Utc>,
    /// Plain-text rendering of the message (images, stickers etc. already described as text).
    pub processed_plain_text: String,
}
