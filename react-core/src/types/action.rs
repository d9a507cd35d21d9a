//! Action and plugin contracts consumed by the host's action-selection engine.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::chat::Chat;
use crate::error::Result;

/// When the host considers an action during action selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationType {
    /// Always offered to the planner.
    Always,
    Never,
    /// Offered with some probability.
    Random,
    /// Offered when the message contains one of the action's keywords.
    Keyword,
}

/// Static registration info for an action.
#[derive(Debug, Clone, Serialize)]
pub struct ActionInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub activation_type: ActivationType,
    /// Whether the action may run alongside other actions (including other instances of itself).
    pub parallel_action: bool,
    /// Natural-language rubric lines telling the planner when to pick the action.
    pub action_require: Vec<&'static str>,
    /// Message kinds the action can respond to (text, emoji, image, ...).
    pub associated_types: Vec<&'static str>,
    pub llm_judge_prompt: &'static str,
}

/// Per-invocation context handed to [`Action::execute`].
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub chat: Chat,
    pub thinking_id: String,
    /// Planner-provided arguments; stored back with the action record untouched.
    pub action_data: serde_json::Value,
}

impl ActionContext {
    pub fn new(chat: Chat, thinking_id: impl Into<String>) -> Self {
        Self {
            chat,
            thinking_id: thinking_id.into(),
            action_data: serde_json::Value::Object(Default::default()),
        }
    }

    pub fn with_action_data(mut self, data: serde_json::Value) -> Self {
        self.action_data = data;
        self
    }

    pub fn is_group(&self) -> bool {
        self.chat.is_group()
    }
}

/// Result of an action as reported to the host: success flag plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

impl ActionOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// A unit of behavior the host can choose to execute.
#[async_trait]
pub trait Action: Send + Sync {
    fn info(&self) -> ActionInfo;

    /// Runs the action. Expected failures come back as `Ok` with `success = false`;
    /// `Err` is reserved for faults the action cannot report as an outcome.
    async fn execute(&self, ctx: &ActionContext) -> Result<ActionOutcome>;
}

/// A plugin bundles actions for the host's plugin loader.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    fn enabled(&self) -> bool {
        true
    }

    fn components(&self) -> Vec<Arc<dyn Action>>;

    /// Looks up a component action by its registered name.
    fn find_action(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.components()
            .into_iter()
            .find(|a| a.info().name == name)
    }
}
