use sea_orm::entity::prelude::*;

/// Retrieved document chunk cited by an answer, ordered by `ref_seq` within its turn.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reference_document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cnvs_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub ref_seq: i32,
    pub doc_type: Option<String>,
    pub doc_name: Option<String>,
    pub doc_id: Option<String>,
    pub file_uid: Option<String>,
    pub download_url: Option<String>,
    pub chunk_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub chunk_text: Option<String>,
    pub similarity_rate: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::conversation_turn::Entity",
        from = "Column::CnvsId",
        to = "super::conversation_turn::Column::CnvsId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ConversationTurn,
}

impl Related<super::conversation_turn::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConversationTurn.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
