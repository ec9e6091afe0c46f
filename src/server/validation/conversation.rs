//! Validators for conversation writes and room-scoped reads.

use crate::{
    model::conversation::{
        FollowUpQuestionDto, ReferenceDocDto, SaveAnswerDto, SaveQueryDto,
        UpdateConversationMetaDto,
    },
    server::{
        error::validation::ValidationError,
        model::{
            conversation::{
                ConversationIdentity, FollowUpQuestion, ReferenceDocument, SaveAnswerParams,
                SaveQueryParams, UpdateConversationMetaParams,
            },
            flag::YesNo,
        },
        validation::{non_blank, require, require_flag, require_list, require_text},
    },
};

/// Validates a query save request.
///
/// Checks `txn_nm`, `session_id`, `user_id` and `menu_key` for presence, then requires
/// `recommended_yn` to be exactly `Y` or `N`.
pub fn validate_query_save(dto: SaveQueryDto) -> Result<SaveQueryParams, ValidationError> {
    let query_text = require_text("txn_nm", dto.txn_nm)?;
    let session_id = require_text("session_id", dto.session_id)?;
    let user_id = require_text("user_id", dto.user_id)?;
    let menu_key = require_text("menu_key", dto.menu_key)?;
    let recommended = require_flag("recommended_yn", dto.recommended_yn)?;

    Ok(SaveQueryParams {
        query_text,
        session_id,
        user_id,
        menu_key,
        recommended,
    })
}

/// Validates an answer save request together with its child collections.
///
/// Required scalar fields are checked in declaration order, then `abort_yn` must be exactly
/// `Y` or `N`, then each child collection must be non-empty with every entry complete. The
/// first failure wins.
pub fn validate_answer_save(dto: SaveAnswerDto) -> Result<SaveAnswerParams, ValidationError> {
    let cnvs_idt_id = require_text("cnvs_idt_id", dto.cnvs_idt_id)?;
    let cnvs_id = require("cnvs_id", dto.cnvs_id)?;
    let reasoning_text = require_text("reasoning_text", dto.reasoning_text)?;
    let answer_text = require_text("answer_text", dto.answer_text)?;
    let routing_type = require_text("routing_type", dto.routing_type)?;
    let doc_category_system = require_text("doc_category_system", dto.doc_category_system)?;
    let search_time_ms = require("search_time_ms", dto.search_time_ms)?;
    let response_time_ms = require("response_time_ms", dto.response_time_ms)?;
    let token_use_count = require("token_use_count", dto.token_use_count)?;
    let user_id = require_text("user_id", dto.user_id)?;
    let aborted = require_flag("abort_yn", dto.abort_yn)?;
    let reference_docs = require_list("reference_docs", dto.reference_docs)?
        .into_iter()
        .map(reference_document)
        .collect::<Result<Vec<_>, _>>()?;
    let follow_up_questions = require_list("follow_up_questions", dto.follow_up_questions)?
        .into_iter()
        .map(follow_up_question)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SaveAnswerParams {
        identity: ConversationIdentity {
            cnvs_idt_id,
            cnvs_id,
        },
        user_id,
        query_summary: dto.query_summary,
        reasoning_text,
        answer_text,
        answer_summary: dto.answer_summary,
        question_category: dto.question_category,
        routing_type,
        doc_category_system,
        search_time_ms,
        response_time_ms,
        token_use_count,
        aborted,
        reference_docs,
        follow_up_questions,
    })
}

fn reference_document(dto: ReferenceDocDto) -> Result<ReferenceDocument, ValidationError> {
    Ok(ReferenceDocument {
        ref_seq: require("reference_docs.ref_seq", dto.ref_seq)?,
        doc_type: dto.doc_type,
        doc_name: dto.doc_name,
        doc_id: dto.doc_id,
        file_uid: dto.file_uid,
        download_url: dto.download_url,
        chunk_name: dto.chunk_name,
        chunk_text: dto.chunk_text,
        similarity_rate: dto.similarity_rate,
    })
}

fn follow_up_question(dto: FollowUpQuestionDto) -> Result<FollowUpQuestion, ValidationError> {
    Ok(FollowUpQuestion {
        seq: require("follow_up_questions.seq", dto.seq)?,
        text: require_text("follow_up_questions.text", dto.text)?,
        classification_code: dto.classification_code,
    })
}

/// Validates a room metadata update.
///
/// Blank `rep_cnvs_nm` and `use_yn` count as "no change"; at least one change is required.
/// `use_yn` is upper-cased before the `Y`/`N` check, so `"y"` is accepted.
pub fn validate_conversation_meta(
    dto: UpdateConversationMetaDto,
) -> Result<UpdateConversationMetaParams, ValidationError> {
    let cnvs_idt_id = require_text("cnvs_idt_id", dto.cnvs_idt_id)?;
    let display_name = non_blank(dto.rep_cnvs_nm);
    let use_yn = non_blank(dto.use_yn);

    if display_name.is_none() && use_yn.is_none() {
        return Err(ValidationError::NoMetaChange);
    }

    let is_active = use_yn
        .map(|value| YesNo::parse_normalized(&value).ok_or(ValidationError::InvalidFlag("use_yn")))
        .transpose()?;

    Ok(UpdateConversationMetaParams {
        cnvs_idt_id,
        display_name,
        is_active,
    })
}

/// Validates the room key of a room-scoped read or reset.
pub fn validate_room_key(cnvs_idt_id: String) -> Result<String, ValidationError> {
    require_text("cnvs_idt_id", Some(cnvs_idt_id))
}
