use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        envelope::OperationResult,
        error_report::{SaveErrorReportDto, SaveErrorReportPayload},
    },
    server::{
        data::error_report::ErrorReportRepository,
        error::AppError,
        middleware::{auth::AuthGuard, json::ApiJson},
        service::error_report::ErrorReportService,
        state::AppState,
    },
};

/// Tag for grouping error report endpoints in OpenAPI documentation
pub static ERROR_REPORT_TAG: &str = "error_report";

/// File an error report against an answered turn.
///
/// # Returns
/// - `200 OK` - Envelope with per-statement results and the codes stored for the turn
/// - `400 Bad Request` - Required field missing, or the code list empty or holding a blank code
/// - `401 Unauthorized` - No user in session
/// - `403 Forbidden` - Turn missing or asked by another user
#[utoipa::path(
    post,
    path = "/api/error-reports",
    tag = ERROR_REPORT_TAG,
    request_body = SaveErrorReportDto,
    responses(
        (status = 200, description = "Report saved or storage fault envelope", body = OperationResult<SaveErrorReportPayload>),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Turn not asked by the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_error_report(
    State(state): State<AppState>,
    session: Session,
    ApiJson(mut payload): ApiJson<SaveErrorReportDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.user_id = Some(AuthGuard::new(&session).require_user().await?);

    let repo = ErrorReportRepository::new(&state.db);
    let result = ErrorReportService::new(&repo)
        .save_error_report(payload)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
