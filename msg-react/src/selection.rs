//! The model's reaction choice: `{"message_id": ..., "emoji_id": ...}`.
//!
//! Fields are extracted defensively. Both accept JSON strings or numbers, since models are
//! inconsistent about quoting ids.

use react_core::{ReactError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Parsed model reply. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelSelection {
    #[serde(default)]
    pub message_id: Option<Value>,
    #[serde(default)]
    pub emoji_id: Option<Value>,
}

/// Strips whitespace and quote characters and parses the rest as an integer:
/// `"  '307' "` → `Some(307)`.
pub fn normalize_emoji_id(raw: &str) -> Option<i64> {
    raw.replace(['"', '\''], "").trim().parse().ok()
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl ModelSelection {
    /// Parses repaired model output. Anything but a JSON object is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ReactError::InvalidSelection(format!("malformed JSON: {}", e)))?;
        if !value.is_object() {
            return Err(ReactError::InvalidSelection(format!(
                "expected a JSON object, got: {}",
                text
            )));
        }
        serde_json::from_value(value).map_err(|e| ReactError::InvalidSelection(e.to_string()))
    }

    /// Target message id as sent to the gateway.
    pub fn message_id(&self) -> Result<String> {
        self.message_id
            .as_ref()
            .and_then(value_text)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ReactError::InvalidSelection("missing message_id".to_string()))
    }

    /// Chosen emoji id, normalized with [`normalize_emoji_id`].
    pub fn emoji_id(&self) -> Result<i64> {
        let raw = self
            .emoji_id
            .as_ref()
            .and_then(value_text)
            .ok_or_else(|| ReactError::InvalidSelection("missing emoji_id".to_string()))?;
        normalize_emoji_id(&raw).ok_or_else(|| {
            ReactError::InvalidSelection(format!("emoji_id is not an integer: {}", raw))
        })
    }
}
