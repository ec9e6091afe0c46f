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
                    .table(ReferenceDocument::Table)
                    .if_not_exists()
                    .col(big_integer(ReferenceDocument::CnvsId))
                    .col(integer(ReferenceDocument::RefSeq))
                    .col(string_null(ReferenceDocument::DocType))
                    .col(string_null(ReferenceDocument::DocName))
                    .col(string_null(ReferenceDocument::DocId))
                    .col(string_null(ReferenceDocument::FileUid))
                    .col(string_null(ReferenceDocument::DownloadUrl))
                    .col(string_null(ReferenceDocument::ChunkName))
                    .col(text_null(ReferenceDocument::ChunkText))
                    .col(double_null(ReferenceDocument::SimilarityRate))
                    .primary_key(
                        Index::create()
                            .col(ReferenceDocument::CnvsId)
                            .col(ReferenceDocument::RefSeq),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reference_document_cnvs_id")
                            .from(ReferenceDocument::Table, ReferenceDocument::CnvsId)
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
            .drop_table(Table::drop().table(ReferenceDocument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReferenceDocument {
    Table,
    CnvsId,
    RefSeq,
    DocType,
    DocName,
    DocId,
    FileUid,
    DownloadUrl,
    ChunkName,
    ChunkText,
    SimilarityRate,
}
