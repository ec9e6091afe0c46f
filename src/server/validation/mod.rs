//! Request validation.
//!
//! Each validator takes a request DTO by value and either returns the typed parameters the
//! orchestrator works with or the first `ValidationError` found, checking fields in a fixed
//! order. Validators are pure: they never touch storage or session state.

pub mod conversation;
pub mod error_report;

use crate::server::{error::validation::ValidationError, model::flag::YesNo};

/// Returns the value when it is present and not blank.
fn require_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Returns the value when it is present.
fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Requires an exact `Y` or `N`.
fn require_flag(field: &'static str, value: Option<String>) -> Result<YesNo, ValidationError> {
    let value = require_text(field, value)?;

    YesNo::parse_strict(&value).ok_or(ValidationError::InvalidFlag(field))
}

/// Requires a present, non-empty collection.
fn require_list<T>(field: &'static str, value: Option<Vec<T>>) -> Result<Vec<T>, ValidationError> {
    match value {
        Some(list) if !list.is_empty() => Ok(list),
        _ => Err(ValidationError::EmptyList(field)),
    }
}

/// Treats blank optional text as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
