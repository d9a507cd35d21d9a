//! `msg_react` action: choose a recent message and an emoji with the model, then react.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use llm_client::{ModelInvoker, ModelRegistry, TOOL_USE_MODEL};
use napcat_client::{NapcatClient, ReactionGateway, ReactionRequest};
use react_core::{
    Action, ActionContext, ActionInfo, ActionOutcome, ActionRecord, ActionRecorder,
    RecentMessageSource, Result,
};
use tracing::{debug, error, info, instrument, warn};

use crate::catalog::{catalog_prompt, emoji_name};
use crate::config::PluginConfig;
use crate::json_fix::{BestEffortJsonRepair, JsonRepair};
use crate::plugin::msg_react_info;
use crate::selection::ModelSelection;

/// How many recent messages the model sees.
pub const RECENT_MESSAGE_LIMIT: usize = 15;

/// Request type tag for the model call.
pub const REQUEST_TYPE: &str = "text";

pub const GROUP_ONLY_MESSAGE: &str = "消息反应仅支持群聊";

pub const MISSING_MODEL_MESSAGE: &str = "未找到'tool_use'模型配置";

fn reaction_description(message_id: &str, emoji_name: &str) -> String {
    format!("反应表情：贴在了消息ID={}上，表情是={}", message_id, emoji_name)
}

/// Reacts to a recent group message with an emoji picked by the `tool_use` model.
///
/// Flow: recent messages → prompt → model → repair/parse → catalog lookup → gateway → record.
/// Wrong chat type, missing model config and failed model calls come back as failed outcomes
/// without side effects. A reply that cannot be parsed into a selection is an
/// [`react_core::ReactError::InvalidSelection`]. Gateway failures are logged but do not fail the
/// action; the record is stored either way.
///
/// The gateway receives `emoji_id` as the parsed integer's decimal string, not the model's text:
/// `"  '307' "` goes out as `"307"` and `"0076"` as `"76"`.
pub struct MessageReactAction {
    config: PluginConfig,
    messages: Arc<dyn RecentMessageSource>,
    models: Arc<ModelRegistry>,
    invoker: Arc<dyn ModelInvoker>,
    recorder: Arc<dyn ActionRecorder>,
    gateway: Arc<dyn ReactionGateway>,
    json_repair: Arc<dyn JsonRepair>,
}

impl MessageReactAction {
    /// Creates the action with a NapCat gateway built from `config.napcat`.
    pub fn new(
        config: PluginConfig,
        messages: Arc<dyn RecentMessageSource>,
        models: Arc<ModelRegistry>,
        invoker: Arc<dyn ModelInvoker>,
        recorder: Arc<dyn ActionRecorder>,
    ) -> Self {
        let gateway = Arc::new(NapcatClient::new(&config.napcat.host, config.napcat.port));
        Self {
            config,
            messages,
            models,
            invoker,
            recorder,
            gateway,
            json_repair: Arc::new(BestEffortJsonRepair),
        }
    }

    pub fn with_gateway(mut self, gateway: Arc<dyn ReactionGateway>) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn with_json_repair(mut self, json_repair: Arc<dyn JsonRepair>) -> Self {
        self.json_repair = json_repair;
        self
    }

    async fn build_prompt(&self, chat_id: &str) -> Result<String> {
        let recent = self
            .messages
            .get_recent_messages(chat_id, RECENT_MESSAGE_LIMIT)
            .await?;
        let messages_text = prompt::format_recent_messages(&recent, Utc::now());
        info!(chat_id = %chat_id, count = recent.len(), "recent messages: {}", messages_text);

        let prompt = prompt::build_reaction_prompt(&messages_text, &catalog_prompt());
        debug!(prompt = %prompt, "reaction prompt");
        Ok(prompt)
    }
}

#[async_trait]
impl Action for MessageReactAction {
    fn info(&self) -> ActionInfo {
        msg_react_info()
    }

    #[instrument(skip(self, ctx), fields(chat_id = %ctx.chat.id, thinking_id = %ctx.thinking_id))]
    async fn execute(&self, ctx: &ActionContext) -> Result<ActionOutcome> {
        if !ctx.is_group() {
            info!("step: not a group chat, skipping reaction");
            return Ok(ActionOutcome::fail(GROUP_ONLY_MESSAGE));
        }
        let chat_id = ctx.chat.id.as_str();

        let prompt = self.build_prompt(chat_id).await?;

        let Some(model) = self.models.get(TOOL_USE_MODEL) else {
            error!("no '{}' model config, cannot call the model", TOOL_USE_MODEL);
            return Ok(ActionOutcome::fail(MISSING_MODEL_MESSAGE));
        };

        let generation = self
            .invoker
            .generate_with_model(&prompt, model, REQUEST_TYPE)
            .await;
        debug!(raw = %generation.content, success = generation.success, "model reply");
        if !generation.success {
            error!(raw = %generation.content, "model call failed");
            return Ok(ActionOutcome::fail(format!(
                "LLM调用失败: {}",
                generation.content
            )));
        }

        let fixed = self.json_repair.repair(&generation.content);
        debug!(fixed = %fixed, "model reply after repair");
        let selection = ModelSelection::parse(&fixed)?;
        let message_id = selection.message_id()?;
        let emoji_id = selection.emoji_id()?;
        let name = emoji_name(emoji_id);
        if name.is_none() {
            warn!(emoji_id, "model chose an emoji id outside the catalog");
        }
        let name = name.unwrap_or_default();
        debug!(message_id = %message_id, emoji_id, emoji_name = %name, "selection parsed");

        let request = ReactionRequest::set_like(
            chat_id,
            message_id.as_str(),
            emoji_id.to_string(),
            self.config.napcat.token().map(String::from),
        );
        let applied = self.gateway.set_msg_emoji_like(&request).await;
        if applied.success {
            info!(message_id = %message_id, emoji_id, "step: reaction applied");
        } else {
            warn!(message_id = %message_id, emoji_id, reason = %applied.message, "step: reaction not applied");
        }

        let description = reaction_description(&message_id, name);
        self.recorder
            .store_action_info(ActionRecord {
                chat_id: chat_id.to_string(),
                action_build_into_prompt: true,
                action_prompt_display: format!("[{}]", description),
                action_done: true,
                thinking_id: ctx.thinking_id.clone(),
                action_data: ctx.action_data.clone(),
                action_name: msg_react_info().name.to_string(),
                time: Utc::now(),
            })
            .await?;

        Ok(ActionOutcome::ok(description))
    }
}
