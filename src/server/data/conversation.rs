//! Conversation repository.
//!
//! Stores conversation rooms, their turns and the reference documents and follow-up
//! questions attached to answered turns. Writes spanning more than one table run in a single
//! transaction so a failed statement leaves no partial turn behind.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::store::ConversationStore,
    model::{
        conversation::{
            ConversationIdentity, ConversationMeta, ConversationTurn, RoomSummary,
            SaveAnswerParams, SaveQueryParams, UpdateConversationMetaParams,
        },
        flag::YesNo,
        outcome::StatementOutcome,
    },
};

pub const UPDATE_CONVERSATION_SUMMARY: &str = "update-conversation-summary";
pub const INSERT_REFERENCE_DOCS: &str = "insert-reference-docs";
pub const INSERT_FOLLOWUP_QUESTIONS: &str = "insert-followup-questions";
pub const UPDATE_CONVERSATION_META: &str = "update-conversation-meta";
pub const DELETE_ERROR_REPORT_CODES: &str = "delete-error-report-codes";
pub const DELETE_ERROR_REPORTS: &str = "delete-error-reports";
pub const DELETE_FOLLOWUP_QUESTIONS: &str = "delete-followup-questions";
pub const DELETE_REFERENCE_DOCS: &str = "delete-reference-docs";
pub const DELETE_CONVERSATION_TURNS: &str = "delete-conversation-turns";
pub const DELETE_CONVERSATION_ROOM: &str = "delete-conversation-room";

/// Builds the key of a new room, e.g. `u1_20250101000000000`.
pub fn conversation_key(user_id: &str, now: DateTime<Utc>) -> String {
    format!("{}_{}", user_id, now.format("%Y%m%d%H%M%S%3f"))
}

pub struct ConversationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConversationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ConversationStore for ConversationRepository<'_> {
    /// Saves a query as a new turn, creating the session's room on its first query.
    ///
    /// The room is looked up by session and user. A new room takes the first
    /// `DISPLAY_NAME_MAX_CHARS` characters of the query as its display name and starts out
    /// active; an existing room only has its `updated_at` refreshed.
    ///
    /// # Returns
    /// - `Ok(ConversationIdentity)` - Room key and the id assigned to the new turn
    /// - `Err(DbErr)` - Database error; nothing is written
    async fn insert_query(&self, params: &SaveQueryParams) -> Result<ConversationIdentity, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let existing = entity::prelude::ConversationRoom::find()
            .filter(entity::conversation_room::Column::SessionId.eq(params.session_id.as_str()))
            .filter(entity::conversation_room::Column::UserId.eq(params.user_id.as_str()))
            .order_by_desc(entity::conversation_room::Column::CreatedAt)
            .one(&txn)
            .await?;

        let cnvs_idt_id = match existing {
            Some(room) => {
                let cnvs_idt_id = room.cnvs_idt_id.clone();

                let mut active_model: entity::conversation_room::ActiveModel = room.into();
                active_model.updated_at = ActiveValue::Set(now);
                active_model.update(&txn).await?;

                cnvs_idt_id
            }
            None => {
                let cnvs_idt_id = conversation_key(&params.user_id, now);

                entity::conversation_room::ActiveModel {
                    cnvs_idt_id: ActiveValue::Set(cnvs_idt_id.clone()),
                    user_id: ActiveValue::Set(params.user_id.clone()),
                    session_id: ActiveValue::Set(params.session_id.clone()),
                    menu_key: ActiveValue::Set(params.menu_key.clone()),
                    rep_cnvs_nm: ActiveValue::Set(params.default_display_name()),
                    use_yn: ActiveValue::Set(YesNo::Yes.as_str().to_string()),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                }
                .insert(&txn)
                .await?;

                cnvs_idt_id
            }
        };

        let turn = entity::conversation_turn::ActiveModel {
            cnvs_idt_id: ActiveValue::Set(cnvs_idt_id.clone()),
            user_id: ActiveValue::Set(params.user_id.clone()),
            query_text: ActiveValue::Set(params.query_text.clone()),
            recommended_yn: ActiveValue::Set(params.recommended.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(ConversationIdentity {
            cnvs_idt_id,
            cnvs_id: turn.cnvs_id,
        })
    }

    /// Saves an answer with its reference documents and follow-up questions.
    ///
    /// Children already stored for the turn are replaced, so saving the same answer twice
    /// leaves one copy of each child. When the turn id does not belong to the given room no
    /// row is touched and every outcome reports zero rows.
    async fn insert_answer_with_children(
        &self,
        params: &SaveAnswerParams,
    ) -> Result<Vec<StatementOutcome>, DbErr> {
        let txn = self.db.begin().await?;
        let cnvs_id = params.identity.cnvs_id;

        let summary = entity::prelude::ConversationTurn::update_many()
            .set(entity::conversation_turn::ActiveModel {
                query_summary: ActiveValue::Set(params.query_summary.clone()),
                reasoning_text: ActiveValue::Set(Some(params.reasoning_text.clone())),
                answer_text: ActiveValue::Set(Some(params.answer_text.clone())),
                answer_summary: ActiveValue::Set(params.answer_summary.clone()),
                question_category: ActiveValue::Set(params.question_category.clone()),
                routing_type: ActiveValue::Set(Some(params.routing_type.clone())),
                doc_category_system: ActiveValue::Set(Some(params.doc_category_system.clone())),
                search_time_ms: ActiveValue::Set(Some(params.search_time_ms)),
                response_time_ms: ActiveValue::Set(Some(params.response_time_ms)),
                token_use_count: ActiveValue::Set(Some(params.token_use_count)),
                abort_yn: ActiveValue::Set(Some(params.aborted.as_str().to_string())),
                answered_at: ActiveValue::Set(Some(Utc::now())),
                ..Default::default()
            })
            .filter(entity::conversation_turn::Column::CnvsId.eq(cnvs_id))
            .filter(
                entity::conversation_turn::Column::CnvsIdtId
                    .eq(params.identity.cnvs_idt_id.as_str()),
            )
            .exec(&txn)
            .await?;

        // Turn is not part of the given room; leave its children alone.
        if summary.rows_affected == 0 {
            txn.rollback().await?;

            return Ok(vec![
                StatementOutcome::new(UPDATE_CONVERSATION_SUMMARY, 0),
                StatementOutcome::new(INSERT_REFERENCE_DOCS, 0),
                StatementOutcome::new(INSERT_FOLLOWUP_QUESTIONS, 0),
            ]);
        }

        entity::prelude::ReferenceDocument::delete_many()
            .filter(entity::reference_document::Column::CnvsId.eq(cnvs_id))
            .exec(&txn)
            .await?;

        entity::prelude::FollowUpQuestion::delete_many()
            .filter(entity::follow_up_question::Column::CnvsId.eq(cnvs_id))
            .exec(&txn)
            .await?;

        let mut reference_rows = 0u64;
        for doc in &params.reference_docs {
            reference_rows += entity::prelude::ReferenceDocument::insert(
                entity::reference_document::ActiveModel {
                    cnvs_id: ActiveValue::Set(cnvs_id),
                    ref_seq: ActiveValue::Set(doc.ref_seq),
                    doc_type: ActiveValue::Set(doc.doc_type.clone()),
                    doc_name: ActiveValue::Set(doc.doc_name.clone()),
                    doc_id: ActiveValue::Set(doc.doc_id.clone()),
                    file_uid: ActiveValue::Set(doc.file_uid.clone()),
                    download_url: ActiveValue::Set(doc.download_url.clone()),
                    chunk_name: ActiveValue::Set(doc.chunk_name.clone()),
                    chunk_text: ActiveValue::Set(doc.chunk_text.clone()),
                    similarity_rate: ActiveValue::Set(doc.similarity_rate),
                },
            )
            .exec_without_returning(&txn)
            .await?;
        }

        let mut follow_up_rows = 0u64;
        for question in &params.follow_up_questions {
            follow_up_rows += entity::prelude::FollowUpQuestion::insert(
                entity::follow_up_question::ActiveModel {
                    cnvs_id: ActiveValue::Set(cnvs_id),
                    seq: ActiveValue::Set(question.seq),
                    question_text: ActiveValue::Set(question.text.clone()),
                    classification_code: ActiveValue::Set(question.classification_code.clone()),
                },
            )
            .exec_without_returning(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(vec![
            StatementOutcome::from_rows(UPDATE_CONVERSATION_SUMMARY, summary.rows_affected),
            StatementOutcome::from_rows(INSERT_REFERENCE_DOCS, reference_rows),
            StatementOutcome::from_rows(INSERT_FOLLOWUP_QUESTIONS, follow_up_rows),
        ])
    }

    async fn update_conversation_meta(
        &self,
        params: &UpdateConversationMetaParams,
    ) -> Result<Vec<StatementOutcome>, DbErr> {
        let mut changes = entity::conversation_room::ActiveModel {
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(display_name) = &params.display_name {
            changes.rep_cnvs_nm = ActiveValue::Set(display_name.clone());
        }
        if let Some(is_active) = params.is_active {
            changes.use_yn = ActiveValue::Set(is_active.as_str().to_string());
        }

        let result = entity::prelude::ConversationRoom::update_many()
            .set(changes)
            .filter(entity::conversation_room::Column::CnvsIdtId.eq(params.cnvs_idt_id.as_str()))
            .exec(self.db)
            .await?;

        Ok(vec![StatementOutcome::from_rows(
            UPDATE_CONVERSATION_META,
            result.rows_affected,
        )])
    }

    async fn read_conversation_meta(
        &self,
        cnvs_idt_id: &str,
    ) -> Result<Option<ConversationMeta>, DbErr> {
        entity::prelude::ConversationRoom::find_by_id(cnvs_idt_id.to_string())
            .one(self.db)
            .await?
            .map(ConversationMeta::from_entity)
            .transpose()
    }

    async fn is_room_owned_by_user(&self, cnvs_idt_id: &str, user_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ConversationRoom::find()
            .filter(entity::conversation_room::Column::CnvsIdtId.eq(cnvs_idt_id))
            .filter(entity::conversation_room::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn list_rooms(&self, user_id: &str) -> Result<Vec<RoomSummary>, DbErr> {
        entity::prelude::ConversationRoom::find()
            .filter(entity::conversation_room::Column::UserId.eq(user_id))
            .filter(entity::conversation_room::Column::UseYn.eq(YesNo::Yes.as_str()))
            .order_by_desc(entity::conversation_room::Column::UpdatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(RoomSummary::from_entity)
            .collect()
    }

    /// Reads a room's turns ordered by turn id, with children fetched in one query per
    /// child table.
    async fn read_room_history(&self, cnvs_idt_id: &str) -> Result<Vec<ConversationTurn>, DbErr> {
        let turns = entity::prelude::ConversationTurn::find()
            .filter(entity::conversation_turn::Column::CnvsIdtId.eq(cnvs_idt_id))
            .order_by_asc(entity::conversation_turn::Column::CnvsId)
            .all(self.db)
            .await?;

        if turns.is_empty() {
            return Ok(Vec::new());
        }

        let turn_ids: Vec<i64> = turns.iter().map(|turn| turn.cnvs_id).collect();

        let mut reference_docs: HashMap<i64, Vec<entity::reference_document::Model>> =
            HashMap::new();
        for doc in entity::prelude::ReferenceDocument::find()
            .filter(entity::reference_document::Column::CnvsId.is_in(turn_ids.clone()))
            .all(self.db)
            .await?
        {
            reference_docs.entry(doc.cnvs_id).or_default().push(doc);
        }

        let mut follow_up_questions: HashMap<i64, Vec<entity::follow_up_question::Model>> =
            HashMap::new();
        for question in entity::prelude::FollowUpQuestion::find()
            .filter(entity::follow_up_question::Column::CnvsId.is_in(turn_ids))
            .all(self.db)
            .await?
        {
            follow_up_questions
                .entry(question.cnvs_id)
                .or_default()
                .push(question);
        }

        turns
            .into_iter()
            .map(|turn| {
                let docs = reference_docs.remove(&turn.cnvs_id).unwrap_or_default();
                let questions = follow_up_questions
                    .remove(&turn.cnvs_id)
                    .unwrap_or_default();

                ConversationTurn::from_entity(turn, docs, questions)
            })
            .collect()
    }

    /// Deletes a room bottom-up: error report codes, error reports, follow-up questions,
    /// reference documents, turns, then the room itself.
    async fn delete_room(&self, cnvs_idt_id: &str) -> Result<Vec<StatementOutcome>, DbErr> {
        let txn = self.db.begin().await?;

        let turn_ids: Vec<i64> = entity::prelude::ConversationTurn::find()
            .filter(entity::conversation_turn::Column::CnvsIdtId.eq(cnvs_idt_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|turn| turn.cnvs_id)
            .collect();

        let report_codes = entity::prelude::ErrorReportCode::delete_many()
            .filter(entity::error_report_code::Column::CnvsId.is_in(turn_ids.clone()))
            .exec(&txn)
            .await?;

        let reports = entity::prelude::ErrorReport::delete_many()
            .filter(entity::error_report::Column::CnvsId.is_in(turn_ids.clone()))
            .exec(&txn)
            .await?;

        let follow_ups = entity::prelude::FollowUpQuestion::delete_many()
            .filter(entity::follow_up_question::Column::CnvsId.is_in(turn_ids.clone()))
            .exec(&txn)
            .await?;

        let reference_docs = entity::prelude::ReferenceDocument::delete_many()
            .filter(entity::reference_document::Column::CnvsId.is_in(turn_ids))
            .exec(&txn)
            .await?;

        let turns = entity::prelude::ConversationTurn::delete_many()
            .filter(entity::conversation_turn::Column::CnvsIdtId.eq(cnvs_idt_id))
            .exec(&txn)
            .await?;

        let room = entity::prelude::ConversationRoom::delete_many()
            .filter(entity::conversation_room::Column::CnvsIdtId.eq(cnvs_idt_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(vec![
            StatementOutcome::from_rows(DELETE_ERROR_REPORT_CODES, report_codes.rows_affected),
            StatementOutcome::from_rows(DELETE_ERROR_REPORTS, reports.rows_affected),
            StatementOutcome::from_rows(DELETE_FOLLOWUP_QUESTIONS, follow_ups.rows_affected),
            StatementOutcome::from_rows(DELETE_REFERENCE_DOCS, reference_docs.rows_affected),
            StatementOutcome::from_rows(DELETE_CONVERSATION_TURNS, turns.rows_affected),
            StatementOutcome::from_rows(DELETE_CONVERSATION_ROOM, room.rows_affected),
        ])
    }
}
