//! # LLM client abstraction
//!
//! Defines the [`ModelInvoker`] trait, the [`ModelRegistry`] of named model configs, and an
//! OpenAI-compatible implementation. Transport-agnostic for callers: msg-react only sees
//! [`Generation`] values.

use async_trait::async_trait;

mod config;
mod openai_llm;

pub use config::{ModelConfig, ModelRegistry, TOOL_USE_MODEL};
pub use openai_llm::OpenAiModelInvoker;

/// Result of one model invocation.
///
/// Invocation failures do not surface as `Err`: `success` is false and `content` carries the
/// error text, so callers can report it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub success: bool,
    pub content: String,
    pub model_name: String,
}

impl Generation {
    pub fn ok(content: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            success: true,
            content: content.into(),
            model_name: model_name.into(),
        }
    }

    pub fn failed(content: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            success: false,
            content: content.into(),
            model_name: model_name.into(),
        }
    }
}

/// Model invocation interface: send a prompt to the model described by `config`.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// `request_type` tags the call for logging and accounting (e.g. `"text"`).
    async fn generate_with_model(
        &self,
        prompt: &str,
        config: &ModelConfig,
        request_type: &str,
    ) -> Generation;
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}
