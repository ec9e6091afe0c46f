//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model`, keeping entity types out of the orchestration layer. They implement the
//! storage ports declared in `store`, which is the only view of storage the orchestrator has.
//! Multi-statement writes run inside a single database transaction.

pub mod conversation;
pub mod error_report;
pub mod store;
