//! Storage ports consumed by the conversation orchestrator.
//!
//! Each port method is one named storage operation. The SeaORM repositories in this module
//! implement them against the application database; orchestrator tests substitute an
//! in-memory fake. Every fault, whether connectivity, constraint or timeout, is reported as
//! `DbErr`.

use sea_orm::DbErr;
use std::future::Future;

use crate::server::model::{
    conversation::{
        ConversationIdentity, ConversationMeta, ConversationTurn, RoomSummary, SaveAnswerParams,
        SaveQueryParams, UpdateConversationMetaParams,
    },
    error_report::SaveErrorReportParams,
    outcome::StatementOutcome,
};

/// Storage operations for conversation rooms and turns.
pub trait ConversationStore: Sync {
    /// Saves a user query as a new turn.
    ///
    /// Reuses the room of the caller's session when one exists, otherwise creates it and
    /// assigns its key.
    fn insert_query(
        &self,
        params: &SaveQueryParams,
    ) -> impl Future<Output = Result<ConversationIdentity, DbErr>> + Send;

    /// Writes the answer columns of a turn and replaces its reference documents and
    /// follow-up questions as one unit.
    ///
    /// Returns one outcome per write: `update-conversation-summary`, `insert-reference-docs`
    /// and `insert-followup-questions`.
    fn insert_answer_with_children(
        &self,
        params: &SaveAnswerParams,
    ) -> impl Future<Output = Result<Vec<StatementOutcome>, DbErr>> + Send;

    /// Applies a display name and/or use flag change to a room.
    fn update_conversation_meta(
        &self,
        params: &UpdateConversationMetaParams,
    ) -> impl Future<Output = Result<Vec<StatementOutcome>, DbErr>> + Send;

    /// Reads the current display name and use flag of a room, `None` if it does not exist.
    fn read_conversation_meta(
        &self,
        cnvs_idt_id: &str,
    ) -> impl Future<Output = Result<Option<ConversationMeta>, DbErr>> + Send;

    /// Checks that a room exists and belongs to `user_id`, regardless of its use flag.
    fn is_room_owned_by_user(
        &self,
        cnvs_idt_id: &str,
        user_id: &str,
    ) -> impl Future<Output = Result<bool, DbErr>> + Send;

    /// Lists the active rooms of a user, most recently updated first.
    fn list_rooms(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<RoomSummary>, DbErr>> + Send;

    /// Reads every turn of a room in turn order, each with its ordered children.
    fn read_room_history(
        &self,
        cnvs_idt_id: &str,
    ) -> impl Future<Output = Result<Vec<ConversationTurn>, DbErr>> + Send;

    /// Deletes a room and every row that depends on it as one unit.
    fn delete_room(
        &self,
        cnvs_idt_id: &str,
    ) -> impl Future<Output = Result<Vec<StatementOutcome>, DbErr>> + Send;
}

/// Storage operations for error reports.
pub trait ErrorReportStore: Sync {
    /// Inserts a report and its selected codes as one unit. Codes already stored for the
    /// same turn and user are skipped.
    fn insert_error_report(
        &self,
        params: &SaveErrorReportParams,
    ) -> impl Future<Output = Result<Vec<StatementOutcome>, DbErr>> + Send;

    /// Reports whether a conversation turn exists and was asked by `user_id`.
    fn is_turn_owned_by_user(
        &self,
        cnvs_id: i64,
        user_id: &str,
    ) -> impl Future<Output = Result<bool, DbErr>> + Send;

    /// Reads the codes stored for a turn and user, in ascending code order.
    fn read_saved_error_codes(
        &self,
        cnvs_id: i64,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<String>, DbErr>> + Send;
}
