use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is bound to the current session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user id present in the session")]
    UserNotInSession,

    /// The acting user does not own the requested conversation room.
    ///
    /// Returned for rooms owned by another user and for rooms that do not exist, so callers
    /// cannot discover other users' room keys. Results in a 403 Forbidden response.
    #[error("User {user_id} may not access conversation room {room_key}")]
    RoomAccessDenied { room_key: String, user_id: String },

    /// The acting user did not ask the conversation turn an error report targets.
    ///
    /// Returned for other users' turns and for turns that do not exist. Results in a 403
    /// Forbidden response.
    #[error("User {user_id} may not report errors on conversation turn {cnvs_id}")]
    TurnAccessDenied { cnvs_id: i64, user_id: String },

    /// Login request did not carry the configured SSO gateway token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Login attempted without a valid gateway token")]
    GatewayTokenRejected,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` → 401 Unauthorized
/// - `GatewayTokenRejected` → 401 Unauthorized
/// - `RoomAccessDenied`, `TurnAccessDenied` → 403 Forbidden
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::GatewayTokenRejected => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid gateway token".to_string(),
                }),
            )
                .into_response(),
            Self::RoomAccessDenied { .. } | Self::TurnAccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have access to this conversation".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
