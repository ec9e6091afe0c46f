use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000002_create_conversation_turn_table::ConversationTurn;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FollowUpQuestion::Table)
                    .if_not_exists()
                    .col(big_integer(FollowUpQuestion::CnvsId))
                    .col(integer(FollowUpQuestion::Seq))
                    .col(text(FollowUpQuestion::QuestionText))
                    .col(string_null(FollowUpQuestion::ClassificationCode))
                    .primary_key(
                        Index::create()
                            .col(FollowUpQuestion::CnvsId)
                            .col(FollowUpQuestion::Seq),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follow_up_question_cnvs_id")
                            .from(FollowUpQuestion::Table, FollowUpQuestion::CnvsId)
                            .to(ConversationTurn::Table, ConversationTurn::CnvsId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FollowUpQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FollowUpQuestion {
    Table,
    CnvsId,
    Seq,
    QuestionText,
    ClassificationCode,
}
