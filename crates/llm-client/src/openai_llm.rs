//! OpenAI-compatible [`ModelInvoker`]: one chat completion per call via async-openai.

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::instrument;

use super::{mask_token, Generation, ModelConfig, ModelInvoker};

/// Invokes models through the OpenAI Chat Completions API (or any compatible endpoint).
///
/// A client is built per call from the [`ModelConfig`], since each named entry may point at a
/// different endpoint or key.
#[derive(Clone, Default)]
pub struct OpenAiModelInvoker;

impl OpenAiModelInvoker {
    pub fn new() -> Self {
        Self
    }

    async fn chat_completion(
        &self,
        config: &ModelConfig,
        prompt: &str,
    ) -> anyhow::Result<String> {
        let client = Client::with_config(
            OpenAIConfig::new()
                .with_api_key(config.api_key.clone())
                .with_api_base(config.base_url.clone()),
        );

        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?
            .into();

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(config.model.as_str()).messages(vec![message.into()]);
        if let Some(t) = config.temperature {
            args.temperature(t);
        }
        let request = args.build()?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            tracing::debug!(request_json = %json, "chat_completion request JSON");
        }

        let response = client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat_completion usage"
            );
        }

        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => anyhow::bail!("No choices in model response"),
        }
    }
}

#[async_trait]
impl ModelInvoker for OpenAiModelInvoker {
    #[instrument(skip(self, prompt, config), fields(model = %config.model, name = %config.name))]
    async fn generate_with_model(
        &self,
        prompt: &str,
        config: &ModelConfig,
        request_type: &str,
    ) -> Generation {
        tracing::info!(
            request_type = %request_type,
            base_url = %config.base_url,
            api_key = %mask_token(&config.api_key),
            prompt_len = prompt.len(),
            "model request"
        );

        match self
            .chat_completion(config, prompt)
            .await
        {
            Ok(content) => Generation::ok(content, config.model.clone()),
            Err(e) => {
                tracing::error!(error = %e, request_type = %request_type, "model request failed");
                Generation::failed(format!("生成内容时出错: {}", e), config.model.clone())
            }
        }
    }
}
