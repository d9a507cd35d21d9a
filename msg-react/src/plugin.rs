//! Plugin registration: one always-active `msg_react` action.

use std::sync::Arc;

use react_core::{Action, ActionInfo, ActivationType, Plugin};

use crate::action::MessageReactAction;
use crate::config::PluginConfig;

pub const PLUGIN_NAME: &str = "maiplug_message_react";

pub const MSG_REACT_ACTION_NAME: &str = "msg_react";

const LLM_JUDGE_PROMPT: &str = r#"
    判定是否需要使用反应动作的条件：
    1. 用户明确要求为其消息添加反应表情
    2. 你需要或者想要对消息添加反应表情以表达情绪
    3. 你想要和某人友好互动，但又不想发送消息破坏聊天节奏
    3. 不要发送太多反应表情，如果你已经发送过多个反应表情则回答"否"

    请回答"是"或"否"。
    "#;

/// Registration info the host's planner sees for `msg_react`.
pub fn msg_react_info() -> ActionInfo {
    ActionInfo {
        name: MSG_REACT_ACTION_NAME,
        description: "向指定群聊消息添加反应表情，表情会显示在对应消息的下面",
        activation_type: ActivationType::Always,
        parallel_action: true,
        action_require: vec![
            "需要或想要对消息添加反应表情时",
            "表达情绪时可以选择使用",
            "当你想要和某人友好互动时可选择调用",
            "当你想要提醒某人时可选择调用",
            "提示：贴反应表情的Action不视为回复消息。无论什么时候，若与reply同时出现在选择中，应优先选择reply的action",
        ],
        associated_types: vec!["text", "emoji", "image", "reply", "voice"],
        llm_judge_prompt: LLM_JUDGE_PROMPT,
    }
}

/// The message-reaction plugin.
pub struct MessageReactPlugin {
    config: PluginConfig,
    action: Arc<MessageReactAction>,
}

impl MessageReactPlugin {
    pub fn new(config: PluginConfig, action: MessageReactAction) -> Self {
        Self {
            config,
            action: Arc::new(action),
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }
}

impl Plugin for MessageReactPlugin {
    fn name(&self) -> &str {
        &self.config.plugin.name
    }

    fn enabled(&self) -> bool {
        self.config.plugin.enabled
    }

    fn components(&self) -> Vec<Arc<dyn Action>> {
        vec![self.action.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_matches_registration_contract() {
        let info = msg_react_info();
        assert_eq!(info.name, "msg_react");
        assert_eq!(info.activation_type, ActivationType::Always);
        assert!(info.parallel_action);
        assert_eq!(
            info.associated_types,
            vec!["text", "emoji", "image", "reply", "voice"]
        );
        assert_eq!(info.action_require.len(), 5);
        assert!(info.llm_judge_prompt.contains("请回答\"是\"或\"否\""));
    }
}
