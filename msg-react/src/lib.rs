//! # msg-react
//!
//! Plugin with a single `msg_react` action: reads the recent group conversation, asks the
//! `tool_use` model to pick a message and a reaction emoji from a fixed catalog, applies the
//! reaction through the NapCat gateway and records what it did.
//!
//! ## Modules
//!
//! - [`catalog`] – the fixed reaction emoji table
//! - [`config`] – plugin config (`[plugin]`, `[napcat]`)
//! - [`json_fix`] – best-effort repair of model JSON output
//! - [`selection`] – parsing the model's `{message_id, emoji_id}` choice
//! - [`action`] – [`MessageReactAction`]
//! - [`plugin`] – [`MessageReactPlugin`] registration

pub mod action;
pub mod catalog;
pub mod config;
pub mod json_fix;
pub mod plugin;
pub mod selection;

pub use action::{MessageReactAction, GROUP_ONLY_MESSAGE, MISSING_MODEL_MESSAGE, RECENT_MESSAGE_LIMIT};
pub use catalog::{emoji_name, EMOJI_CATALOG};
pub use config::{NapcatSection, PluginConfig, PluginSection};
pub use json_fix::{BestEffortJsonRepair, JsonRepair};
pub use plugin::{MessageReactPlugin, MSG_REACT_ACTION_NAME, PLUGIN_NAME};
pub use selection::{normalize_emoji_id, ModelSelection};
