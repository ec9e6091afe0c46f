use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::server::error::{validation::ValidationError, AppError};

/// JSON body extractor that reports unreadable bodies as validation errors.
///
/// Wraps `axum::Json` so a syntax error, wrong content type or mistyped field answers
/// 400 Bad Request with an `ErrorDto` instead of axum's plain-text rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(ValidationError::MalformedBody(rejection.body_text()).into())
            }
        }
    }
}
