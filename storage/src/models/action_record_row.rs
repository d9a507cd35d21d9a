//! Action record row: one executed action, as stored in `action_records`.

use chrono::{DateTime, Utc};
use react_core::ActionRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActionRecordRow {
    pub id: String,
    pub chat_id: String,
    pub action_name: String,
    pub action_build_into_prompt: bool,
    pub action_prompt_display: String,
    pub action_done: bool,
    pub thinking_id: String,
    /// `action_data` serialized as JSON text.
    pub action_data: String,
    pub time: DateTime<Utc>,
}

impl ActionRecordRow {
    pub fn from_record(record: &ActionRecord) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chat_id: record.chat_id.clone(),
            action_name: record.action_name.clone(),
            action_build_into_prompt: record.action_build_into_prompt,
            action_prompt_display: record.action_prompt_display.clone(),
            action_done: record.action_done,
            thinking_id: record.thinking_id.clone(),
            action_data: record.action_data.to_string(),
            time: record.time,
        }
    }

    pub fn into_record(self) -> Result<ActionRecord, StorageError> {
        let action_data = serde_json::from_str(&self.action_data).map_err(|e| StorageError::Corrupt {
            id: self.id.clone(),
            reason: e.to_string(),
        })?;
        Ok(ActionRecord {
            chat_id: self.chat_id,
            action_build_into_prompt: self.action_build_into_prompt,
            action_prompt_display: self.action_prompt_display,
            action_done: self.action_done,
            thinking_id: self.thinking_id,
            action_data,
            action_name: self.action_name,
            time: self.time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_action_data_is_reported() {
        let row = ActionRecordRow {
            id: "r1".to_string(),
            chat_id: "c".to_string(),
            action_name: "msg_react".to_string(),
            action_build_into_prompt: true,
            action_prompt_display: "x".to_string(),
            action_done: true,
            thinking_id: "t".to_string(),
            action_data: "{not json".to_string(),
            time: Utc::now(),
        };
        let err = row.into_record().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { ref id, .. } if id == "r1"));
    }
}
