use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000001_create_conversation_room_table::ConversationRoom;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConversationTurn::Table)
                    .if_not_exists()
                    .col(pk_auto(ConversationTurn::CnvsId))
                    .col(string(ConversationTurn::CnvsIdtId))
                    .col(string(ConversationTurn::UserId))
                    .col(text(ConversationTurn::QueryText))
                    .col(string(ConversationTurn::RecommendedYn))
                    .col(text_null(ConversationTurn::QuerySummary))
                    .col(text_null(ConversationTurn::ReasoningText))
                    .col(text_null(ConversationTurn::AnswerText))
                    .col(text_null(ConversationTurn::AnswerSummary))
                    .col(string_null(ConversationTurn::QuestionCategory))
                    .col(string_null(ConversationTurn::RoutingType))
                    .col(string_null(ConversationTurn::DocCategorySystem))
                    .col(big_integer_null(ConversationTurn::SearchTimeMs))
                    .col(big_integer_null(ConversationTurn::ResponseTimeMs))
                    .col(big_integer_null(ConversationTurn::TokenUseCount))
                    .col(string_null(ConversationTurn::AbortYn))
                    .col(
                        timestamp_with_time_zone(ConversationTurn::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(ConversationTurn::AnsweredAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_conversation_turn_cnvs_idt_id")
                            .from(ConversationTurn::Table, ConversationTurn::CnvsIdtId)
                            .to(ConversationRoom::Table, ConversationRoom::CnvsIdtId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConversationTurn::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ConversationTurn {
    Table,
    CnvsId,
    CnvsIdtId,
    UserId,
    QueryText,
    RecommendedYn,
    QuerySummary,
    ReasoningText,
    AnswerText,
    AnswerSummary,
    QuestionCategory,
    RoutingType,
    DocCategorySystem,
    SearchTimeMs,
    ResponseTimeMs,
    TokenUseCount,
    AbortYn,
    CreatedAt,
    AnsweredAt,
}
