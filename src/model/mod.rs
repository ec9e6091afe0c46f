//! Request and response DTOs exchanged over the HTTP API.
//!
//! Field names follow the wire contract consumed by the assistant front end
//! (`cnvs_idt_id`, `rep_cnvs_nm`, `use_yn`, ...). Request DTOs keep every field optional so
//! that missing values reach the request validator and are reported with a field-specific
//! message instead of a generic deserialization failure.

pub mod api;
pub mod auth;
pub mod conversation;
pub mod envelope;
pub mod error_report;
