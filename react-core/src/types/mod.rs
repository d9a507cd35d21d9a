//! Core types: chat, recent message, action contract, action record, and collaborator traits.
//!
//! One file per main type, mirroring how the host framework splits its plugin API.

mod action;
mod chat;
mod collaborators;
mod message;
mod record;

pub use action::{Action, ActionContext, ActionInfo, ActionOutcome, ActivationType, Plugin};
pub use chat::{Chat, ChatType};
pub use collaborators::{ActionRecorder, RecentMessageSource};
pub use message::RecentMessage;
pub use record::ActionRecord;
