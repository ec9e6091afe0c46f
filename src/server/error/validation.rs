use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejection raised by the request validator before any storage call is made.
///
/// Each variant carries the wire name of the offending field; the display text is returned to
/// the client verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is absent or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Flag field holds something other than `Y` or `N`.
    #[error("{0} must be 'Y' or 'N'")]
    InvalidFlag(&'static str),

    /// Collection field is absent or empty.
    #[error("{0} must contain at least one entry")]
    EmptyList(&'static str),

    /// Collection field contains a blank entry.
    #[error("{0} must not contain blank entries")]
    BlankEntry(&'static str),

    /// Metadata update names neither a new display name nor a new use flag.
    #[error("rep_cnvs_nm or use_yn is required")]
    NoMetaChange,

    /// Body is not JSON or a field has the wrong type. Carries the parser's message, which
    /// names the offending field path.
    #[error("{0}")]
    MalformedBody(String),
}

/// Converts validation errors into 400 Bad Request responses carrying the error message.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
