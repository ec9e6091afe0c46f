use sea_orm::entity::prelude::*;

/// Free-text error report filed by a user against one conversation turn.
///
/// Reports carry no foreign key to the turn; resetting a room deletes them explicitly.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "error_report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub cnvs_id: i64,
    pub user_id: String,
    #[sea_orm(column_type = "Text")]
    pub err_rpt_txt: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
