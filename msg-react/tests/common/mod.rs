//! Shared fakes for msg-react tests: in-memory message source, scripted model, recording sink.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use llm_client::{Generation, ModelConfig, ModelInvoker, ModelRegistry, TOOL_USE_MODEL};
use msg_react::{MessageReactAction, PluginConfig};
use react_core::{ActionRecord, ActionRecorder, RecentMessage, RecentMessageSource, Result};

/// Fixed recent-message list; remembers every (chat_id, limit) it was asked for.
#[derive(Default)]
pub struct StaticMessages {
    pub messages: Vec<RecentMessage>,
    pub calls: Mutex<Vec<(String, usize)>>,
}

impl StaticMessages {
    pub fn new(messages: Vec<RecentMessage>) -> Self {
        Self {
            messages,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RecentMessageSource for StaticMessages {
    async fn get_recent_messages(&self, chat_id: &str, limit: usize) -> Result<Vec<RecentMessage>> {
        self.calls.lock().unwrap().push((chat_id.to_string(), limit));
        Ok(self.messages.iter().take(limit).cloned().collect())
    }
}

/// Model that always answers with the same [`Generation`] and keeps the prompts it saw.
pub struct ScriptedInvoker {
    pub reply: Generation,
    pub prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedInvoker {
    pub fn replying(content: &str) -> Self {
        Self::with(Generation::ok(content, "test-model"))
    }

    pub fn failing(content: &str) -> Self {
        Self::with(Generation::failed(content, "test-model"))
    }

    fn with(reply: Generation) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().map(|(p, _)| p.clone())
    }
}

#[async_trait]
impl ModelInvoker for ScriptedInvoker {
    async fn generate_with_model(
        &self,
        prompt: &str,
        _config: &ModelConfig,
        request_type: &str,
    ) -> Generation {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), request_type.to_string()));
        self.reply.clone()
    }
}

/// Collects stored action records.
#[derive(Default)]
pub struct MemoryRecorder {
    pub records: Mutex<Vec<ActionRecord>>,
}

impl MemoryRecorder {
    pub fn records(&self) -> Vec<ActionRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActionRecorder for MemoryRecorder {
    async fn store_action_info(&self, record: ActionRecord) -> Result<()> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

pub fn message(id: &str, user: &str, content: &str, minutes_ago: i64) -> RecentMessage {
    RecentMessage {
        message_id: id.to_string(),
        user_nickname: user.to_string(),
        time: Utc::now() - Duration::minutes(minutes_ago),
        processed_plain_text: content.to_string(),
    }
}

pub fn tool_use_config() -> ModelConfig {
    ModelConfig {
        name: TOOL_USE_MODEL.to_string(),
        model: "gpt-4o-mini".to_string(),
        base_url: "http://127.0.0.1:1/v1".to_string(),
        api_key: "sk-test".to_string(),
        temperature: None,
    }
}

pub fn tool_use_registry() -> Arc<ModelRegistry> {
    Arc::new(ModelRegistry::new().with_model(tool_use_config()))
}

/// Everything a test needs to drive and inspect one action.
pub struct Harness {
    pub messages: Arc<StaticMessages>,
    pub invoker: Arc<ScriptedInvoker>,
    pub recorder: Arc<MemoryRecorder>,
}

impl Harness {
    pub fn new(messages: Vec<RecentMessage>, invoker: ScriptedInvoker) -> Self {
        Self {
            messages: Arc::new(StaticMessages::new(messages)),
            invoker: Arc::new(invoker),
            recorder: Arc::new(MemoryRecorder::default()),
        }
    }

    /// Action wired to the fakes; the gateway is the default NapCat client until replaced.
    pub fn action(&self, config: PluginConfig, models: Arc<ModelRegistry>) -> MessageReactAction {
        MessageReactAction::new(
            config,
            self.messages.clone(),
            models,
            self.invoker.clone(),
            self.recorder.clone(),
        )
    }
}
