//! Row models for the `messages` and `action_records` tables.

mod action_record_row;
mod message_record;

pub use action_record_row::ActionRecordRow;
pub use message_record::MessageRecord;
