use sea_orm::entity::prelude::*;

/// A single query/answer turn inside a conversation room.
///
/// The row is created when the user query is saved; the answer columns stay `NULL` until the
/// answer for the turn is saved.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "conversation_turn")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub cnvs_id: i64,
    pub cnvs_idt_id: String,
    pub user_id: String,
    #[sea_orm(column_type = "Text")]
    pub query_text: String,
    pub recommended_yn: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub query_summary: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub reasoning_text: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub answer_text: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub answer_summary: Option<String>,
    pub question_category: Option<String>,
    pub routing_type: Option<String>,
    pub doc_category_system: Option<String>,
    pub search_time_ms: Option<i64>,
    pub response_time_ms: Option<i64>,
    pub token_use_count: Option<i64>,
    pub abort_yn: Option<String>,
    pub created_at: DateTimeUtc,
    pub answered_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::conversation_room::Entity",
        from = "Column::CnvsIdtId",
        to = "super::conversation_room::Column::CnvsIdtId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ConversationRoom,
    #[sea_orm(has_many = "super::reference_document::Entity")]
    ReferenceDocument,
    #[sea_orm(has_many = "super::follow_up_question::Entity")]
    FollowUpQuestion,
}

impl Related<super::conversation_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConversationRoom.def()
    }
}

impl Related<super::reference_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReferenceDocument.def()
    }
}

impl Related<super::follow_up_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FollowUpQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
