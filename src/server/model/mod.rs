//! Server-side domain models and parameter types.
//!
//! Parameter types are produced by the request validator and are the only input the
//! orchestrator hands to the storage port. Domain records are converted from entity models at
//! the repository boundary and into DTOs when the response envelope is built.

pub mod conversation;
pub mod error_report;
pub mod flag;
pub mod outcome;
