use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        conversation::{
            ResetRoomPayload, RoomHistoryPayload, RoomListPayload, SaveAnswerDto,
            SaveAnswerPayload, SaveQueryDto, SaveQueryPayload, UpdateConversationMetaDto,
            UpdateConversationMetaPayload,
        },
        envelope::OperationResult,
    },
    server::{
        data::conversation::ConversationRepository,
        error::AppError,
        middleware::{auth::AuthGuard, json::ApiJson},
        service::conversation::ConversationService,
        state::AppState,
    },
};

/// Tag for grouping conversation endpoints in OpenAPI documentation
pub static CONVERSATION_TAG: &str = "conversation";

/// Save a user query.
///
/// Opens a new room on the first query of a session and adds a turn to it. The acting user
/// replaces any `user_id` in the body.
///
/// # Returns
/// - `200 OK` - Envelope with the room key and turn id; `status` is `error` on a storage fault
/// - `400 Bad Request` - Required field missing or `recommended_yn` not `Y`/`N`
/// - `401 Unauthorized` - No user in session
#[utoipa::path(
    post,
    path = "/api/conversations/query",
    tag = CONVERSATION_TAG,
    request_body = SaveQueryDto,
    responses(
        (status = 200, description = "Query saved or storage fault envelope", body = OperationResult<SaveQueryPayload>),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_query(
    State(state): State<AppState>,
    session: Session,
    ApiJson(mut payload): ApiJson<SaveQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.user_id = Some(AuthGuard::new(&session).require_user().await?);

    let repo = ConversationRepository::new(&state.db);
    let result = ConversationService::new(&repo).save_query(payload).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Save an answer with its reference documents and follow-up questions.
///
/// # Returns
/// - `200 OK` - Envelope with per-statement results; `status` is `error` on a storage fault
/// - `400 Bad Request` - Required field missing, `abort_yn` invalid or a child list empty
/// - `401 Unauthorized` - No user in session
/// - `403 Forbidden` - Room not owned by the user
#[utoipa::path(
    post,
    path = "/api/conversations/answer",
    tag = CONVERSATION_TAG,
    request_body = SaveAnswerDto,
    responses(
        (status = 200, description = "Answer saved or storage fault envelope", body = OperationResult<SaveAnswerPayload>),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Room not owned by the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_answer(
    State(state): State<AppState>,
    session: Session,
    ApiJson(mut payload): ApiJson<SaveAnswerDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.user_id = Some(AuthGuard::new(&session).require_user().await?);

    let repo = ConversationRepository::new(&state.db);
    let result = ConversationService::new(&repo).save_answer(payload).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Rename and/or (de)activate a room.
///
/// # Returns
/// - `200 OK` - Envelope with the stored name and flag read back
/// - `400 Bad Request` - Room key missing, nothing to change or `use_yn` invalid
/// - `401 Unauthorized` - No user in session
/// - `403 Forbidden` - Room not owned by the user
#[utoipa::path(
    patch,
    path = "/api/conversations/meta",
    tag = CONVERSATION_TAG,
    request_body = UpdateConversationMetaDto,
    responses(
        (status = 200, description = "Metadata updated or storage fault envelope", body = OperationResult<UpdateConversationMetaPayload>),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Room not owned by the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_conversation_meta(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<UpdateConversationMetaDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&session).require_user().await?;

    let repo = ConversationRepository::new(&state.db);
    let result = ConversationService::new(&repo)
        .update_conversation_meta(&user_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// List the user's active rooms, most recently updated first.
///
/// # Returns
/// - `200 OK` - Envelope with the rooms; `status` is `error` on a storage fault
/// - `401 Unauthorized` - No user in session
#[utoipa::path(
    get,
    path = "/api/conversations",
    tag = CONVERSATION_TAG,
    responses(
        (status = 200, description = "Rooms of the user or storage fault envelope", body = OperationResult<RoomListPayload>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&session).require_user().await?;

    let repo = ConversationRepository::new(&state.db);
    let result = ConversationService::new(&repo).list_rooms(&user_id).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Read every turn of a room.
///
/// # Returns
/// - `200 OK` - Envelope with the turns in question order and their child lists
/// - `400 Bad Request` - Room key blank
/// - `401 Unauthorized` - No user in session
/// - `403 Forbidden` - Room missing or not owned by the user
#[utoipa::path(
    get,
    path = "/api/conversations/{cnvs_idt_id}/history",
    tag = CONVERSATION_TAG,
    params(
        ("cnvs_idt_id" = String, Path, description = "Room key")
    ),
    responses(
        (status = 200, description = "Turns of the room or storage fault envelope", body = OperationResult<RoomHistoryPayload>),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Room not owned by the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn read_room_history(
    State(state): State<AppState>,
    session: Session,
    Path(cnvs_idt_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&session).require_user().await?;

    let repo = ConversationRepository::new(&state.db);
    let result = ConversationService::new(&repo)
        .read_room_history(&user_id, cnvs_idt_id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Delete a room with all of its turns.
///
/// # Returns
/// - `200 OK` - Envelope with one result per delete statement
/// - `400 Bad Request` - Room key blank
/// - `401 Unauthorized` - No user in session
/// - `403 Forbidden` - Room missing or not owned by the user
#[utoipa::path(
    delete,
    path = "/api/conversations/{cnvs_idt_id}",
    tag = CONVERSATION_TAG,
    params(
        ("cnvs_idt_id" = String, Path, description = "Room key")
    ),
    responses(
        (status = 200, description = "Room deleted or storage fault envelope", body = OperationResult<ResetRoomPayload>),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Room not owned by the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_room(
    State(state): State<AppState>,
    session: Session,
    Path(cnvs_idt_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&session).require_user().await?;

    let repo = ConversationRepository::new(&state.db);
    let result = ConversationService::new(&repo)
        .reset_room(&user_id, cnvs_idt_id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
