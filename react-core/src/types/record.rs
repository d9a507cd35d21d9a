//! Action-outcome record persisted after an action runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What an action did, stored so later prompts can mention it (e.g. "[reacted to message 1]").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub chat_id: String,
    /// Whether the host should include `action_prompt_display` when building later prompts.
    pub action_build_into_prompt: bool,
    pub action_prompt_display: String,
    pub action_done: bool,
    pub thinking_id: String,
    pub action_data: serde_json::Value,
    pub action_name: String,
    pub time: DateTime<Utc>,
}
