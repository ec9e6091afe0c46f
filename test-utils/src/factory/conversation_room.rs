//! Conversation room factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test conversation rooms.
///
/// # Example
///
/// ```rust,ignore
/// let room = RoomFactory::new(&db, "user_1")
///     .session_id("session_a")
///     .use_yn("N")
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    cnvs_idt_id: String,
    user_id: String,
    session_id: String,
    menu_key: String,
    rep_cnvs_nm: String,
    use_yn: String,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - cnvs_idt_id: `"{user_id}_room_{id}"`
    /// - session_id: `"session_{id}"`
    /// - menu_key: `"menu_default"`
    /// - rep_cnvs_nm: `"Room {id}"`
    /// - use_yn: `"Y"`
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        let id = next_id();
        let user_id = user_id.into();
        Self {
            db,
            cnvs_idt_id: format!("{}_room_{}", user_id, id),
            user_id,
            session_id: format!("session_{}", id),
            menu_key: "menu_default".to_string(),
            rep_cnvs_nm: format!("Room {}", id),
            use_yn: "Y".to_string(),
        }
    }

    pub fn cnvs_idt_id(mut self, cnvs_idt_id: impl Into<String>) -> Self {
        self.cnvs_idt_id = cnvs_idt_id.into();
        self
    }

    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn rep_cnvs_nm(mut self, rep_cnvs_nm: impl Into<String>) -> Self {
        self.rep_cnvs_nm = rep_cnvs_nm.into();
        self
    }

    pub fn use_yn(mut self, use_yn: impl Into<String>) -> Self {
        self.use_yn = use_yn.into();
        self
    }

    /// Inserts the room.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created room
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::conversation_room::Model, DbErr> {
        let now = Utc::now();

        entity::conversation_room::ActiveModel {
            cnvs_idt_id: ActiveValue::Set(self.cnvs_idt_id),
            user_id: ActiveValue::Set(self.user_id),
            session_id: ActiveValue::Set(self.session_id),
            menu_key: ActiveValue::Set(self.menu_key),
            rep_cnvs_nm: ActiveValue::Set(self.rep_cnvs_nm),
            use_yn: ActiveValue::Set(self.use_yn),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active room owned by `user_id` with default values.
pub async fn create_room(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::conversation_room::Model, DbErr> {
    RoomFactory::new(db, user_id).build().await
}
