use super::*;
use crate::server::service::test::fake::{room, turn};

mod list_rooms;
mod read_room_history;
mod reset_room;
mod save_query;
mod update_conversation_meta;
