//! # Prompt
//!
//! Formats the reaction-selection prompt sent to the model.
//!
//! ## Format
//!
//! - **Emoji catalog**: `id:name` pairs joined by `", "` in catalog order
//! - **Recent messages**: one line per message, `<id>,<relative time>,<user>:<content>`
//! - **Instruction**: fixed template embedding both blocks and asking for strict JSON
//!   `{"message_id": ..., "emoji_id": ...}`
//!
//! ## External interactions
//!
//! - **AI models**: output is sent as a single user message to the `tool_use` model.

use chrono::{DateTime, Local, Utc};
use react_core::RecentMessage;

/// Renders catalog entries as `"76:点赞, 307:喵喵, ..."`, preserving the given order.
pub fn format_emoji_catalog<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (i64, &'a str)>,
{
    entries
        .into_iter()
        .map(|(id, name)| format!("{}:{}", id, name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable time of `time` relative to `now`.
///
/// Under 20s `刚刚`, under a minute `N秒前`, under an hour `N分钟前`, under a day `N小时前`,
/// under two days `N天前`; older messages get the local date-time followed by `:`.
/// Times in the future are treated as just now.
pub fn relative_time(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - time).num_seconds();
    if diff < 20 {
        "刚刚".to_string()
    } else if diff < 60 {
        format!("{}秒前", diff)
    } else if diff < 3600 {
        format!("{}分钟前", diff / 60)
    } else if diff < 86400 {
        format!("{}小时前", diff / 3600)
    } else if diff < 86400 * 2 {
        format!("{}天前", diff / 86400)
    } else {
        format!(
            "{}:",
            time.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Formats one message as `<id>,<relative time>,<user>:<content>`; line breaks in content become spaces.
pub fn format_message_line(message: &RecentMessage, now: DateTime<Utc>) -> String {
    let content = message
        .processed_plain_text
        .replace('\n', " ")
        .replace('\r', " ");
    format!(
        "{},{},{}:{}",
        message.message_id,
        relative_time(message.time, now),
        message.user_nickname,
        content
    )
}

/// One line per message joined by `\n`; empty string when there are no messages.
pub fn format_recent_messages(messages: &[RecentMessage], now: DateTime<Utc>) -> String {
    messages
        .iter()
        .map(|m| format_message_line(m, now))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the instruction asking the model to pick one message and one reaction emoji.
pub fn build_reaction_prompt(messages_text: &str, catalog_text: &str) -> String {
    format!(
        r#"
你是一个正在进行聊天的网友，你需要根据一个和最近的聊天记录，从一个反应表情列表中选择最匹配的一个反应表情的数字ID。
这是最近的聊天记录列表，消息的格式为："<id>,<time>,<user>:<content>" 一行一个：
{messages_text}
以下是是可用的反应表情，ID 在前，名称在后，不同反应表情间用","分割：
{catalog_text}
请严格按下列的 JSON 格式返回最匹配的那个反应表情 ID 和消息 ID，不要进行任何解释或添加其他多余的文字：
{{
  "message_id": "要贴反应表情的消息ID",
  "emoji_id": "选择的对应反应表情ID"
}}
"#
    )
}
