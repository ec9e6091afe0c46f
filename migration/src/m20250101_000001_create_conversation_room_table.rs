use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConversationRoom::Table)
                    .if_not_exists()
                    .col(string(ConversationRoom::CnvsIdtId).primary_key())
                    .col(string(ConversationRoom::UserId))
                    .col(string(ConversationRoom::SessionId))
                    .col(string(ConversationRoom::MenuKey))
                    .col(string(ConversationRoom::RepCnvsNm))
                    .col(string(ConversationRoom::UseYn).default("Y"))
                    .col(
                        timestamp_with_time_zone(ConversationRoom::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ConversationRoom::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_conversation_room_session_user")
                    .table(ConversationRoom::Table)
                    .col(ConversationRoom::SessionId)
                    .col(ConversationRoom::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConversationRoom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConversationRoom {
    Table,
    CnvsIdtId,
    UserId,
    SessionId,
    MenuKey,
    RepCnvsNm,
    UseYn,
    CreatedAt,
    UpdatedAt,
}
