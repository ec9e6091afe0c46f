use sea_orm::entity::prelude::*;

/// Error code selected in a report. The composite key de-duplicates codes per turn and user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "error_report_code")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cnvs_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub err_rpt_cd: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
