//! DTOs for link lookup endpoint.

use serde::Serialize;

use crate::application::services::LookupResult;

/// The URL a short identifier resolves to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub original_url: String,
}

impl From<LookupResult> for LinkResponse {
    fn from(result: LookupResult) -> Self {
        Self {
            original_url: result.original_url,
        }
    }
}
