//! HTTP request handlers.
//!
//! Controllers resolve the acting user from the session, hand the request to a service and
//! turn the result into a JSON response. They carry no business rules of their own.

pub mod auth;
pub mod conversation;
pub mod error_report;
