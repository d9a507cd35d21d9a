//! Chat identity type.

use serde::{Deserialize, Serialize};

/// Kind of conversation an action runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Group,
    Private,
}

/// Chat (group or private) identity. `id` is the host's stream id, opaque to plugins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub chat_type: ChatType,
}

impl Chat {
    pub fn group(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            chat_type: ChatType::Group,
        }
    }

    pub fn private(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            chat_type: ChatType::Private,
        }
    }

    pub fn is_group(&self) -> bool {
        self.chat_type == ChatType::Group
    }
}
