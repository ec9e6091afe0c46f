//! SeaORM entity models for the conversation store.

pub mod prelude;

pub mod conversation_room;
pub mod conversation_turn;
pub mod error_report;
pub mod error_report_code;
pub mod follow_up_question;
pub mod reference_document;
