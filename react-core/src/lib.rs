//! # react-core
//!
//! Core types and traits for chat-bot action plugins: [`Action`], [`Plugin`], chat and message
//! types, the collaborator traits the host framework provides ([`RecentMessageSource`],
//! [`ActionRecorder`]), and tracing initialization. Transport-agnostic; used by msg-react,
//! storage and the CLI.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{ReactError, Result};
pub use logger::init_tracing;
pub use types::{
    Action, ActionContext, ActionInfo, ActionOutcome, ActionRecord, ActionRecorder,
    ActivationType, Chat, ChatType, Plugin, RecentMessage, RecentMessageSource,
};
