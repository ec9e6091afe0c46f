use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, UserDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        middleware::{
            auth::AuthGuard, gateway::GatewayGuard, json::ApiJson, session::AuthSession,
        },
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Bind a user to the session.
///
/// Called by the SSO gateway once it has verified the user; the submitted user id becomes the
/// acting user of every later request in this session. The gateway proves itself with the
/// shared token in the `x-gateway-token` header.
///
/// # Returns
/// - `200 OK` - User bound to the session
/// - `400 Bad Request` - `user_id` missing or blank
/// - `401 Unauthorized` - Gateway token missing or wrong
/// - `500 Internal Server Error` - Session store error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "User bound to the session", body = UserDto),
        (status = 400, description = "user_id missing", body = ErrorDto),
        (status = 401, description = "Gateway token missing or wrong", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    GatewayGuard::new(&state.gateway_token).require_gateway(&headers)?;

    let user_id = match payload.user_id {
        Some(user_id) if !user_id.trim().is_empty() => user_id,
        _ => return Err(ValidationError::MissingField("user_id").into()),
    };

    AuthSession::new(&session).login(&user_id).await?;

    tracing::info!(user_id = %user_id, "User logged in");

    Ok((StatusCode::OK, Json(UserDto { user_id })))
}

/// Clear the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// Get the user bound to the session.
///
/// # Returns
/// - `200 OK` - Current identity
/// - `401 Unauthorized` - No user in session
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current identity", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&session).require_user().await?;

    Ok((StatusCode::OK, Json(UserDto { user_id })))
}
