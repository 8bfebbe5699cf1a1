//! DTOs for link registration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ShortenResult;

/// Request to register a URL under a short identifier.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to shorten. Stored as given, without well-formedness checks.
    pub url: String,

    /// Optional caller-chosen identifier; generated when absent or empty.
    #[serde(default)]
    #[validate(length(max = 64, message = "Short ID must be at most 64 characters"))]
    pub short_id: Option<String>,
}

/// The identifier the URL was registered under.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_id: String,
}

impl From<ShortenResult> for ShortenResponse {
    fn from(result: ShortenResult) -> Self {
        Self {
            short_id: result.short_id,
        }
    }
}
