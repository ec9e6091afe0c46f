use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::envelope::StatementResultDto;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(default)]
pub struct SaveQueryDto {
    /// Query text typed by the user.
    pub txn_nm: Option<String>,
    pub session_id: Option<String>,
    pub user_id: Option<String>,
    pub menu_key: Option<String>,
    /// `Y` when the query was picked from a recommended question.
    pub recommended_yn: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct SaveQueryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnvs_idt_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnvs_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_nm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_yn: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ReferenceDocDto {
    #[serde(default)]
    pub ref_seq: Option<i32>,
    #[serde(default)]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub doc_name: Option<String>,
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub file_uid: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub chunk_name: Option<String>,
    #[serde(default)]
    pub chunk_text: Option<String>,
    #[serde(default)]
    pub similarity_rate: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FollowUpQuestionDto {
    #[serde(default)]
    pub seq: Option<i32>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub classification_code: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(default)]
pub struct SaveAnswerDto {
    pub cnvs_idt_id: Option<String>,
    pub cnvs_id: Option<i64>,
    pub query_summary: Option<String>,
    pub reasoning_text: Option<String>,
    pub answer_text: Option<String>,
    pub answer_summary: Option<String>,
    pub question_category: Option<String>,
    pub routing_type: Option<String>,
    pub doc_category_system: Option<String>,
    pub search_time_ms: Option<i64>,
    pub response_time_ms: Option<i64>,
    pub token_use_count: Option<i64>,
    pub user_id: Option<String>,
    /// `Y` when generation was stopped before the answer completed.
    pub abort_yn: Option<String>,
    pub reference_docs: Option<Vec<ReferenceDocDto>>,
    pub follow_up_questions: Option<Vec<FollowUpQuestionDto>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct SaveAnswerPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnvs_idt_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnvs_id: Option<i64>,
    pub statement_results: Vec<StatementResultDto>,
    pub saved_ref_seq_list: Vec<i32>,
    pub saved_follow_up_seq_list: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
#[serde(default)]
pub struct UpdateConversationMetaDto {
    pub cnvs_idt_id: Option<String>,
    /// New display name of the conversation.
    pub rep_cnvs_nm: Option<String>,
    /// `Y`/`N`, case-insensitive.
    pub use_yn: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct UpdateConversationMetaPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnvs_idt_id: Option<String>,
    pub statement_results: Vec<StatementResultDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_rep_cnvs_nm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_use_yn: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RoomDto {
    pub cnvs_idt_id: String,
    pub rep_cnvs_nm: String,
    pub use_yn: String,
    pub menu_key: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct RoomListPayload {
    pub rooms: Vec<RoomDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ConversationTurnDto {
    pub cnvs_id: i64,
    pub txn_nm: String,
    pub recommended_yn: String,
    pub answer_text: Option<String>,
    pub reasoning_text: Option<String>,
    pub answer_summary: Option<String>,
    pub abort_yn: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    #[schema(value_type = Option<i64>)]
    pub answered_at: Option<DateTime<Utc>>,
    pub reference_docs: Vec<ReferenceDocDto>,
    pub follow_up_questions: Vec<FollowUpQuestionDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct RoomHistoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnvs_idt_id: Option<String>,
    pub turns: Vec<ConversationTurnDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct ResetRoomPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnvs_idt_id: Option<String>,
    pub statement_results: Vec<StatementResultDto>,
}
