//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type that
//! wraps the concern-specific errors and implements `IntoResponse` for the API endpoints.
//!
//! Storage faults raised inside conversation operations never reach this type; the
//! orchestrator turns them into `status = "error"` envelopes. `DbErr` here only covers
//! startup and session plumbing.

pub mod auth;
pub mod config;
pub mod request;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, request::RequestError, validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Domain-specific errors (`AuthError`, `ValidationError`) handle their own response mapping,
/// while the infrastructure variants all result in 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing identity or room ownership denial.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request rejected by the request validator. Results in 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Listener bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Validation(err) => Self::ValidationErr(err),
            RequestError::Denied(err) => Self::AuthErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `ValidationErr`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
