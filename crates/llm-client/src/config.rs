//! Model configuration: named model entries and an env-based registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

/// Name of the model entry used for tool-style (structured output) calls.
pub const TOOL_USE_MODEL: &str = "tool_use";

/// One named model entry for an OpenAI-compatible API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    pub model: String,
    pub base_url: String,
    pub api_key: String,
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Registry of model configs by name (e.g. `tool_use`).
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: HashMap<String, ModelConfig>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `config` under its name, replacing any previous entry.
    pub fn with_model(mut self, config: ModelConfig) -> Self {
        self.models.insert(config.name.clone(), config);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ModelConfig> {
        self.models.get(name)
    }

    pub fn get_available_models(&self) -> &HashMap<String, ModelConfig> {
        &self.models
    }

    /// Builds the registry from environment variables.
    ///
    /// The `tool_use` entry comes from OPENAI_API_KEY, OPENAI_BASE_URL and TOOL_USE_MODEL
    /// (falling back to MODEL). Without an API key the registry is empty.
    pub fn from_env() -> Self {
        let api_key = match env::var("OPENAI_API_KEY") {
            Ok(k) if !k.trim().is_empty() => k,
            _ => return Self::new(),
        };
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = env::var("TOOL_USE_MODEL")
            .or_else(|_| env::var("MODEL"))
            .unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let temperature = env::var("TOOL_USE_TEMPERATURE")
            .ok()
            .and_then(|s| s.parse().ok());
        Self::new().with_model(ModelConfig {
            name: TOOL_USE_MODEL.to_string(),
            model,
            base_url,
            api_key,
            temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "OPENAI_API_KEY",
            "OPENAI_BASE_URL",
            "TOOL_USE_MODEL",
            "MODEL",
            "TOOL_USE_TEMPERATURE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn from_env_without_key_is_empty() {
        clear_env();
        let registry = ModelRegistry::from_env();
        assert!(registry.get(TOOL_USE_MODEL).is_none());
        assert!(registry.get_available_models().is_empty());
    }

    #[test]
    #[serial]
    fn from_env_with_defaults() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-test");
        let registry = ModelRegistry::from_env();
        let cfg = registry.get(TOOL_USE_MODEL).unwrap();
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.base_url, "https://api.openai.com/v1");
        assert_eq!(cfg.temperature, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn tool_use_model_overrides_model() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("MODEL", "gpt-3.5-turbo");
        env::set_var("TOOL_USE_MODEL", "qwen-plus");
        env::set_var("TOOL_USE_TEMPERATURE", "0.3");
        let registry = ModelRegistry::from_env();
        let cfg = registry.get(TOOL_USE_MODEL).unwrap();
        assert_eq!(cfg.model, "qwen-plus");
        assert_eq!(cfg.temperature, Some(0.3));
        clear_env();
    }

    #[test]
    fn with_model_replaces_same_name() {
        let a = ModelConfig {
            name: "tool_use".to_string(),
            model: "a".to_string(),
            base_url: "http://x".to_string(),
            api_key: "k".to_string(),
            temperature: None,
        };
        let b = ModelConfig {
            model: "b".to_string(),
            ..a.clone()
        };
        let registry = ModelRegistry::new().with_model(a).with_model(b);
        assert_eq!(registry.get_available_models().len(), 1);
        assert_eq!(registry.get("tool_use").unwrap().model, "b");
    }
}
