use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ErrorReportCode::Table)
                    .if_not_exists()
                    .col(big_integer(ErrorReportCode::CnvsId))
                    .col(string(ErrorReportCode::UserId))
                    .col(string(ErrorReportCode::ErrRptCd))
                    .col(
                        timestamp_with_time_zone(ErrorReportCode::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(ErrorReportCode::CnvsId)
                            .col(ErrorReportCode::UserId)
                            .col(ErrorReportCode::ErrRptCd),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ErrorReportCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ErrorReportCode {
    Table,
    CnvsId,
    UserId,
    ErrRptCd,
    CreatedAt,
}
