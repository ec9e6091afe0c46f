//! Room and turn ownership guards.

use sea_orm::DbErr;

use crate::server::data::store::{ConversationStore, ErrorReportStore};

/// Confirms that a conversation room belongs to the acting user.
///
/// Holds no state between calls; every check queries storage again. A room that does not
/// exist and a room owned by someone else both yield `false`.
pub struct RoomOwnershipGuard<'a, S> {
    store: &'a S,
}

impl<'a, S: ConversationStore> RoomOwnershipGuard<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// # Returns
    /// - `Ok(true)` - Room exists and is owned by `user_id`
    /// - `Ok(false)` - Room is missing or owned by another user
    /// - `Err(DbErr)` - Storage fault while checking
    pub async fn is_owner(&self, cnvs_idt_id: &str, user_id: &str) -> Result<bool, DbErr> {
        self.store.is_room_owned_by_user(cnvs_idt_id, user_id).await
    }
}

/// Confirms that a conversation turn exists and was asked by the acting user.
pub struct TurnOwnershipGuard<'a, S> {
    store: &'a S,
}

impl<'a, S: ErrorReportStore> TurnOwnershipGuard<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// # Returns
    /// - `Ok(true)` - Turn exists and was asked by `user_id`
    /// - `Ok(false)` - Turn is missing or belongs to another user
    /// - `Err(DbErr)` - Storage fault while checking
    pub async fn is_owner(&self, cnvs_id: i64, user_id: &str) -> Result<bool, DbErr> {
        self.store.is_turn_owned_by_user(cnvs_id, user_id).await
    }
}
