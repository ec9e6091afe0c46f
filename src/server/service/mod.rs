//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the storage ports. They are
//! responsible for:
//!
//! - **Validation**: Turning request DTOs into typed parameters before storage is touched
//! - **Authorization**: Checking room ownership for room-scoped operations
//! - **Orchestration**: Sequencing storage operations and aggregating their outcomes
//! - **Envelopes**: Building the uniform `OperationResult` returned to callers
//!
//! Services are generic over the storage port so they can run against the SeaORM
//! repositories or an in-memory fake.

pub mod conversation;
pub mod envelope;
pub mod error_report;
pub mod ownership;
