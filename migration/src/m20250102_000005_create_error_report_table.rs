use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ErrorReport::Table)
                    .if_not_exists()
                    .col(pk_auto(ErrorReport::Id))
                    .col(big_integer(ErrorReport::CnvsId))
                    .col(string(ErrorReport::UserId))
                    .col(text(ErrorReport::ErrRptTxt))
                    .col(
                        timestamp_with_time_zone(ErrorReport::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ErrorReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ErrorReport {
    Table,
    Id,
    CnvsId,
    UserId,
    ErrRptTxt,
    CreatedAt,
}
