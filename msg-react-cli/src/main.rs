//! msg-react CLI: run the reaction action against the local store, seed messages, show history.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use msg_react::MSG_REACT_ACTION_NAME;
use msg_react_cli::{build_plugin, database_url, log_file, plugin_config_path, Cli, Commands};
use react_core::{init_tracing, ActionContext, Chat, Plugin};
use storage::{MessageRecord, MessageRepository};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&log_file())?;

    let repo = MessageRepository::new(&database_url())
        .await
        .context("Open message database (DATABASE_URL)")?;

    match cli.command {
        Commands::React {
            chat_id,
            private,
            config,
        } => handle_react(repo, chat_id, private, config).await,
        Commands::Seed {
            chat_id,
            user,
            content,
            message_id,
        } => handle_seed(repo, chat_id, user, content, message_id).await,
        Commands::History { chat_id } => handle_history(repo, chat_id).await,
        Commands::Info => handle_info(repo),
    }
}

async fn handle_react(
    repo: MessageRepository,
    chat_id: String,
    private: bool,
    config: Option<String>,
) -> Result<()> {
    let plugin = build_plugin(&plugin_config_path(config), Arc::new(repo))?;
    if !plugin.enabled() {
        println!("Plugin {} is disabled", plugin.name());
        return Ok(());
    }
    let action = plugin
        .find_action(MSG_REACT_ACTION_NAME)
        .context("msg_react action not registered")?;

    let chat = if private {
        Chat::private(chat_id)
    } else {
        Chat::group(chat_id)
    };
    let thinking_id = uuid::Uuid::new_v4().to_string();
    info!(chat_id = %chat.id, thinking_id = %thinking_id, "Running msg_react");

    let outcome = action.execute(&ActionContext::new(chat, thinking_id)).await?;
    println!("success: {}", outcome.success);
    println!("message: {}", outcome.message);
    Ok(())
}

async fn handle_seed(
    repo: MessageRepository,
    chat_id: String,
    user: String,
    content: String,
    message_id: Option<String>,
) -> Result<()> {
    let message_id =
        message_id.unwrap_or_else(|| chrono::Utc::now().timestamp_millis().to_string());
    let record = MessageRecord::new(chat_id, message_id, user, content);
    repo.save(&record).await?;
    println!("Saved message {} in chat {}", record.message_id, record.chat_id);
    Ok(())
}

async fn handle_history(repo: MessageRepository, chat_id: String) -> Result<()> {
    let actions = repo.get_actions_by_chat(&chat_id).await?;
    if actions.is_empty() {
        println!("No actions recorded for chat {}", chat_id);
        return Ok(());
    }
    for action in actions {
        println!(
            "{} {} {}",
            action.time.format("%Y-%m-%d %H:%M:%S"),
            action.action_name,
            action.action_prompt_display
        );
    }
    Ok(())
}

fn handle_info(repo: MessageRepository) -> Result<()> {
    let plugin = build_plugin(&plugin_config_path(None), Arc::new(repo))?;
    println!("plugin: {} (enabled: {})", plugin.name(), plugin.enabled());
    for action in plugin.components() {
        let info = action.info();
        println!("{}", serde_json::to_string_pretty(&info)?);
    }
    Ok(())
}
