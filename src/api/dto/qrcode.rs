//! DTOs for QR code endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::QrCodeResult;

/// Request to render a URL as a QR code.
///
/// `url` stays optional here so a missing value reaches the service and
/// fails as a QR generation error rather than a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct QrCodeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// PNG data URI of the rendered code.
#[derive(Debug, Serialize)]
pub struct QrCodeResponse {
    pub base64: String,
}

impl From<QrCodeResult> for QrCodeResponse {
    fn from(result: QrCodeResult) -> Self {
        Self {
            base64: result.base64,
        }
    }
}
