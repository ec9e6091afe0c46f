use crate::server::{
    data::{conversation::ConversationRepository, store::ConversationStore},
    model::{
        conversation::{
            ConversationIdentity, FollowUpQuestion, ReferenceDocument, SaveAnswerParams,
            SaveQueryParams, UpdateConversationMetaParams,
        },
        flag::YesNo,
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete_room;
mod insert_answer_with_children;
mod insert_query;
mod is_room_owned_by_user;
mod read_room_history;
mod update_conversation_meta;

fn query_params(user_id: &str, session_id: &str, query_text: &str) -> SaveQueryParams {
    SaveQueryParams {
        query_text: query_text.to_string(),
        session_id: session_id.to_string(),
        user_id: user_id.to_string(),
        menu_key: "m1".to_string(),
        recommended: YesNo::No,
    }
}

fn reference_doc(ref_seq: i32) -> ReferenceDocument {
    ReferenceDocument {
        ref_seq,
        doc_type: Some("pdf".to_string()),
        doc_name: Some(format!("doc {}", ref_seq)),
        doc_id: Some(format!("DOC-{}", ref_seq)),
        file_uid: None,
        download_url: None,
        chunk_name: None,
        chunk_text: Some("chunk".to_string()),
        similarity_rate: Some(0.5),
    }
}

fn follow_up(seq: i32) -> FollowUpQuestion {
    FollowUpQuestion {
        seq,
        text: format!("follow up {}", seq),
        classification_code: None,
    }
}

fn answer_params(
    identity: ConversationIdentity,
    user_id: &str,
    ref_seqs: &[i32],
    follow_up_seqs: &[i32],
) -> SaveAnswerParams {
    SaveAnswerParams {
        identity,
        user_id: user_id.to_string(),
        query_summary: Some("summary".to_string()),
        reasoning_text: "reasoning".to_string(),
        answer_text: "answer".to_string(),
        answer_summary: None,
        question_category: None,
        routing_type: "RAG".to_string(),
        doc_category_system: "HR".to_string(),
        search_time_ms: 10,
        response_time_ms: 200,
        token_use_count: 300,
        aborted: YesNo::No,
        reference_docs: ref_seqs.iter().copied().map(reference_doc).collect(),
        follow_up_questions: follow_up_seqs.iter().copied().map(follow_up).collect(),
    }
}
