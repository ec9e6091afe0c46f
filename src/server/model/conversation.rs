//! Conversation domain models and parameters.
//!
//! Covers the three writes of a conversation turn (query, answer with its reference
//! documents and follow-up questions, room metadata) and the read models used for the room
//! list and the room history.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::conversation::{
        ConversationTurnDto, FollowUpQuestionDto, ReferenceDocDto, RoomDto, SaveQueryPayload,
    },
    server::model::flag::YesNo,
};

/// Maximum number of characters of the first query kept as a room's display name.
pub const DISPLAY_NAME_MAX_CHARS: usize = 100;

/// Identifies one turn inside one conversation room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationIdentity {
    /// Room key, assigned on the first turn of a session and never changed afterwards.
    pub cnvs_idt_id: String,
    /// Turn id.
    pub cnvs_id: i64,
}

/// Validated parameters for saving a user query.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveQueryParams {
    pub query_text: String,
    pub session_id: String,
    pub user_id: String,
    pub menu_key: String,
    pub recommended: YesNo,
}

impl SaveQueryParams {
    /// Display name given to a room created by this query.
    pub fn default_display_name(&self) -> String {
        self.query_text.chars().take(DISPLAY_NAME_MAX_CHARS).collect()
    }
}

/// A persisted query together with the identity storage assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedQuery {
    pub identity: ConversationIdentity,
    pub query_text: String,
    pub session_id: String,
    pub menu_key: String,
    pub recommended: YesNo,
}

impl SavedQuery {
    /// Builds the echo of a saved query from its parameters and assigned identity.
    pub fn from_params(params: SaveQueryParams, identity: ConversationIdentity) -> Self {
        Self {
            identity,
            query_text: params.query_text,
            session_id: params.session_id,
            menu_key: params.menu_key,
            recommended: params.recommended,
        }
    }

    pub fn into_payload(self) -> SaveQueryPayload {
        SaveQueryPayload {
            cnvs_idt_id: Some(self.identity.cnvs_idt_id),
            cnvs_id: Some(self.identity.cnvs_id),
            txn_nm: Some(self.query_text),
            session_id: Some(self.session_id),
            menu_key: Some(self.menu_key),
            recommended_yn: Some(self.recommended.as_str().to_string()),
        }
    }
}

/// Document chunk cited by an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDocument {
    pub ref_seq: i32,
    pub doc_type: Option<String>,
    pub doc_name: Option<String>,
    pub doc_id: Option<String>,
    pub file_uid: Option<String>,
    pub download_url: Option<String>,
    pub chunk_name: Option<String>,
    pub chunk_text: Option<String>,
    pub similarity_rate: Option<f64>,
}

impl ReferenceDocument {
    pub fn from_entity(entity: entity::reference_document::Model) -> Self {
        Self {
            ref_seq: entity.ref_seq,
            doc_type: entity.doc_type,
            doc_name: entity.doc_name,
            doc_id: entity.doc_id,
            file_uid: entity.file_uid,
            download_url: entity.download_url,
            chunk_name: entity.chunk_name,
            chunk_text: entity.chunk_text,
            similarity_rate: entity.similarity_rate,
        }
    }

    pub fn into_dto(self) -> ReferenceDocDto {
        ReferenceDocDto {
            ref_seq: Some(self.ref_seq),
            doc_type: self.doc_type,
            doc_name: self.doc_name,
            doc_id: self.doc_id,
            file_uid: self.file_uid,
            download_url: self.download_url,
            chunk_name: self.chunk_name,
            chunk_text: self.chunk_text,
            similarity_rate: self.similarity_rate,
        }
    }
}

/// Suggested next question attached to an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUpQuestion {
    pub seq: i32,
    pub text: String,
    pub classification_code: Option<String>,
}

impl FollowUpQuestion {
    pub fn from_entity(entity: entity::follow_up_question::Model) -> Self {
        Self {
            seq: entity.seq,
            text: entity.question_text,
            classification_code: entity.classification_code,
        }
    }

    pub fn into_dto(self) -> FollowUpQuestionDto {
        FollowUpQuestionDto {
            seq: Some(self.seq),
            text: Some(self.text),
            classification_code: self.classification_code,
        }
    }
}

/// Validated parameters for saving an answer and its child collections.
///
/// Both child collections are guaranteed non-empty by the request validator.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveAnswerParams {
    pub identity: ConversationIdentity,
    pub user_id: String,
    pub query_summary: Option<String>,
    pub reasoning_text: String,
    pub answer_text: String,
    pub answer_summary: Option<String>,
    pub question_category: Option<String>,
    pub routing_type: String,
    pub doc_category_system: String,
    pub search_time_ms: i64,
    pub response_time_ms: i64,
    pub token_use_count: i64,
    pub aborted: YesNo,
    pub reference_docs: Vec<ReferenceDocument>,
    pub follow_up_questions: Vec<FollowUpQuestion>,
}

impl SaveAnswerParams {
    /// Sequence numbers of the reference documents, in request order.
    pub fn ref_seq_list(&self) -> Vec<i32> {
        self.reference_docs.iter().map(|doc| doc.ref_seq).collect()
    }

    /// Sequence numbers of the follow-up questions, in request order.
    pub fn follow_up_seq_list(&self) -> Vec<i32> {
        self.follow_up_questions.iter().map(|q| q.seq).collect()
    }
}

/// Validated parameters for a room metadata update. At least one change is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateConversationMetaParams {
    pub cnvs_idt_id: String,
    pub display_name: Option<String>,
    pub is_active: Option<YesNo>,
}

/// Room metadata as read back after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationMeta {
    pub display_name: String,
    pub is_active: YesNo,
}

impl ConversationMeta {
    /// # Returns
    /// - `Ok(ConversationMeta)` - Converted metadata
    /// - `Err(DbErr::Custom)` - Stored `use_yn` is not `Y` or `N`
    pub fn from_entity(entity: entity::conversation_room::Model) -> Result<Self, DbErr> {
        Ok(Self {
            is_active: YesNo::from_stored("use_yn", &entity.use_yn)?,
            display_name: entity.rep_cnvs_nm,
        })
    }
}

/// One row of a user's room list.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSummary {
    pub cnvs_idt_id: String,
    pub display_name: String,
    pub is_active: YesNo,
    pub menu_key: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RoomSummary {
    pub fn from_entity(entity: entity::conversation_room::Model) -> Result<Self, DbErr> {
        Ok(Self {
            is_active: YesNo::from_stored("use_yn", &entity.use_yn)?,
            cnvs_idt_id: entity.cnvs_idt_id,
            display_name: entity.rep_cnvs_nm,
            menu_key: entity.menu_key,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            cnvs_idt_id: self.cnvs_idt_id,
            rep_cnvs_nm: self.display_name,
            use_yn: self.is_active.as_str().to_string(),
            menu_key: self.menu_key,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// One turn of a room's history with its ordered child collections.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub cnvs_id: i64,
    pub query_text: String,
    pub recommended: YesNo,
    pub answer_text: Option<String>,
    pub reasoning_text: Option<String>,
    pub answer_summary: Option<String>,
    /// Unset until the answer for the turn has been saved.
    pub aborted: Option<YesNo>,
    pub created_at: DateTime<Utc>,
    pub answered_at: Option<DateTime<Utc>>,
    pub reference_docs: Vec<ReferenceDocument>,
    pub follow_up_questions: Vec<FollowUpQuestion>,
}

impl ConversationTurn {
    /// Converts a turn row and its child rows at the repository boundary.
    ///
    /// Children are sorted by their sequence numbers regardless of the order they were read in.
    ///
    /// # Returns
    /// - `Ok(ConversationTurn)` - Converted turn
    /// - `Err(DbErr::Custom)` - A stored flag column is not `Y` or `N`
    pub fn from_entity(
        entity: entity::conversation_turn::Model,
        reference_docs: Vec<entity::reference_document::Model>,
        follow_up_questions: Vec<entity::follow_up_question::Model>,
    ) -> Result<Self, DbErr> {
        let recommended = YesNo::from_stored("recommended_yn", &entity.recommended_yn)?;
        let aborted = entity
            .abort_yn
            .as_deref()
            .map(|value| YesNo::from_stored("abort_yn", value))
            .transpose()?;

        let mut reference_docs: Vec<ReferenceDocument> = reference_docs
            .into_iter()
            .map(ReferenceDocument::from_entity)
            .collect();
        reference_docs.sort_by_key(|doc| doc.ref_seq);

        let mut follow_up_questions: Vec<FollowUpQuestion> = follow_up_questions
            .into_iter()
            .map(FollowUpQuestion::from_entity)
            .collect();
        follow_up_questions.sort_by_key(|q| q.seq);

        Ok(Self {
            cnvs_id: entity.cnvs_id,
            query_text: entity.query_text,
            recommended,
            answer_text: entity.answer_text,
            reasoning_text: entity.reasoning_text,
            answer_summary: entity.answer_summary,
            aborted,
            created_at: entity.created_at,
            answered_at: entity.answered_at,
            reference_docs,
            follow_up_questions,
        })
    }

    pub fn into_dto(self) -> ConversationTurnDto {
        ConversationTurnDto {
            cnvs_id: self.cnvs_id,
            txn_nm: self.query_text,
            recommended_yn: self.recommended.as_str().to_string(),
            answer_text: self.answer_text,
            reasoning_text: self.reasoning_text,
            answer_summary: self.answer_summary,
            abort_yn: self.aborted.map(|flag| flag.as_str().to_string()),
            created_at: self.created_at,
            answered_at: self.answered_at,
            reference_docs: self
                .reference_docs
                .into_iter()
                .map(ReferenceDocument::into_dto)
                .collect(),
            follow_up_questions: self
                .follow_up_questions
                .into_iter()
                .map(FollowUpQuestion::into_dto)
                .collect(),
        }
    }
}
