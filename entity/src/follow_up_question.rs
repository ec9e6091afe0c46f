use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "follow_up_question")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cnvs_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub seq: i32,
    #[sea_orm(column_type = "Text")]
    pub question_text: String,
    pub classification_code: Option<String>,
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
