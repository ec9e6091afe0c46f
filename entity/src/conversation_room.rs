use sea_orm::entity::prelude::*;

/// One conversation thread ("room"), keyed by the conversation key assigned on the first
/// turn of a session.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "conversation_room")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cnvs_idt_id: String,
    pub user_id: String,
    pub session_id: String,
    pub menu_key: String,
    pub rep_cnvs_nm: String,
    pub use_yn: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::conversation_turn::Entity")]
    ConversationTurn,
}

impl Related<super::conversation_turn::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConversationTurn.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
