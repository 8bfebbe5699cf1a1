//! Validation for caller-supplied short identifiers.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Longest accepted caller-supplied identifier.
pub const MAX_SHORT_ID_LENGTH: usize = 64;

/// Identifiers that would shadow top-level routes.
const RESERVED_SHORT_IDS: &[&str] = &["api", "health", "static"];

static SHORT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid short id regex"));

/// Checks a caller-supplied identifier without altering it.
///
/// # Rules
///
/// - At most [`MAX_SHORT_ID_LENGTH`] characters
/// - Letters, digits, `_` and `-` only, so it fits in a single path segment
/// - Not a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_short_id(short_id: &str) -> Result<(), AppError> {
    if short_id.len() > MAX_SHORT_ID_LENGTH {
        return Err(AppError::bad_request(
            format!("Short ID must be at most {MAX_SHORT_ID_LENGTH} characters"),
            json!({ "provided_length": short_id.len() }),
        ));
    }

    if !SHORT_ID_REGEX.is_match(short_id) {
        return Err(AppError::bad_request(
            "Short ID can only contain letters, digits, underscores and hyphens",
            json!({ "shortId": short_id }),
        ));
    }

    if RESERVED_SHORT_IDS.contains(&short_id) {
        return Err(AppError::bad_request(
            "This short ID is reserved",
            json!({ "shortId": short_id }),
        ));
    }

    Ok(())
}
