//! Conversation turn factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating unanswered conversation turns.
pub struct TurnFactory<'a> {
    db: &'a DatabaseConnection,
    cnvs_idt_id: String,
    user_id: String,
    query_text: String,
    recommended_yn: String,
}

impl<'a> TurnFactory<'a> {
    /// Creates a new TurnFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `"user_{id}"`
    /// - query_text: `"Question {id}"`
    /// - recommended_yn: `"N"`
    pub fn new(db: &'a DatabaseConnection, cnvs_idt_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            cnvs_idt_id: cnvs_idt_id.into(),
            user_id: format!("user_{}", id),
            query_text: format!("Question {}", id),
            recommended_yn: "N".to_string(),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn query_text(mut self, query_text: impl Into<String>) -> Self {
        self.query_text = query_text.into();
        self
    }

    /// Inserts the turn; the database assigns `cnvs_id`.
    pub async fn build(self) -> Result<entity::conversation_turn::Model, DbErr> {
        entity::conversation_turn::ActiveModel {
            cnvs_idt_id: ActiveValue::Set(self.cnvs_idt_id),
            user_id: ActiveValue::Set(self.user_id),
            query_text: ActiveValue::Set(self.query_text),
            recommended_yn: ActiveValue::Set(self.recommended_yn),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unanswered turn in the given room with default values.
pub async fn create_turn(
    db: &DatabaseConnection,
    cnvs_idt_id: &str,
) -> Result<entity::conversation_turn::Model, DbErr> {
    TurnFactory::new(db, cnvs_idt_id).build().await
}
