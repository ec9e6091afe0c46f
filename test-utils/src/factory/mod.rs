//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a builder-style `Factory` for customization and a `create_*`
//! convenience function for the defaults.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let room = factory::create_room(&db, "user_1").await?;
//! let turn = factory::create_turn(&db, &room.cnvs_idt_id).await?;
//!
//! let (room, turn) = factory::helpers::create_room_with_turn(&db, "user_1").await?;
//! ```
//!
//! # Available Factories
//!
//! - `conversation_room` - Conversation threads
//! - `conversation_turn` - Query/answer turns inside a room
//! - `error_report_code` - Persisted error report codes
//! - `helpers` - Unique ids and entities created together with their dependencies

pub mod conversation_room;
pub mod conversation_turn;
pub mod error_report_code;
pub mod helpers;

pub use conversation_room::create_room;
pub use conversation_turn::create_turn;
pub use error_report_code::create_error_report_code;
