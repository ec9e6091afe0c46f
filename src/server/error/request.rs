use thiserror::Error;

use crate::server::error::{auth::AuthError, validation::ValidationError};

/// Error channel of the conversation orchestrator.
///
/// Only request rejections travel here. Storage faults are folded into the response envelope
/// and have no variant.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Denied(#[from] AuthError),
}
