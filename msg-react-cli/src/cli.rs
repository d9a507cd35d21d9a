//! CLI parser, env defaults and plugin wiring.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use llm_client::{ModelRegistry, OpenAiModelInvoker};
use msg_react::{MessageReactAction, MessageReactPlugin, PluginConfig};
use storage::MessageRepository;

#[derive(Parser)]
#[command(name = "msg-react")]
#[command(about = "Message reaction plugin CLI: react, seed, history, info", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the msg_react action once for a chat.
    React {
        #[arg(long)]
        chat_id: String,
        /// Treat the chat as a private chat (the action will refuse).
        #[arg(long)]
        private: bool,
        /// Plugin config file; overrides MSG_REACT_CONFIG.
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Insert a message into the local store.
    Seed {
        #[arg(long)]
        chat_id: String,
        #[arg(long)]
        user: String,
        #[arg(long)]
        content: String,
        /// Platform message id; a millisecond timestamp when omitted.
        #[arg(long)]
        message_id: Option<String>,
    },
    /// List recorded actions for a chat.
    History {
        #[arg(long)]
        chat_id: String,
    },
    /// Print the action registration.
    Info,
}

/// DATABASE_URL, default `./msg_react.db`.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "./msg_react.db".to_string())
}

/// LOG_FILE, default `logs/msg-react.log`.
pub fn log_file() -> String {
    std::env::var("LOG_FILE").unwrap_or_else(|_| "logs/msg-react.log".to_string())
}

/// `--config` if given, else MSG_REACT_CONFIG, else `config.toml`.
pub fn plugin_config_path(arg: Option<String>) -> String {
    arg.or_else(|| std::env::var("MSG_REACT_CONFIG").ok())
        .unwrap_or_else(|| "config.toml".to_string())
}

/// Loads and validates the plugin config and wires the action to `repo` and the env models.
pub fn build_plugin(config_path: &str, repo: Arc<MessageRepository>) -> Result<MessageReactPlugin> {
    let config = PluginConfig::load(config_path)
        .with_context(|| format!("Load plugin config from {}", config_path))?;
    config.validate()?;

    let models = Arc::new(ModelRegistry::from_env());
    let action = MessageReactAction::new(
        config.clone(),
        repo.clone(),
        models,
        Arc::new(OpenAiModelInvoker::new()),
        repo,
    );
    Ok(MessageReactPlugin::new(config, action))
}
