//! Handler for QR code generation endpoint.

use axum::{Json, extract::State};

use crate::api::dto::qrcode::{QrCodeRequest, QrCodeResponse};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Renders a URL as a PNG QR code data URI.
///
/// # Endpoint
///
/// `POST /api/qrcode`
///
/// # Request Body
///
/// ```json
/// { "url": "http://localhost:3000/ABCDE" }
/// ```
///
/// # Response
///
/// ```json
/// { "base64": "data:image/png;base64,iVBORw0KGgo..." }
/// ```
///
/// # Errors
///
/// Returns 400 with code `qr_code_error` when `url` is missing or cannot be
/// encoded. The reason is not distinguished. A body that is not JSON is a
/// 400 `validation_error`.
pub async fn qrcode_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<QrCodeRequest>,
) -> Result<Json<QrCodeResponse>, AppError> {
    let result = state.link_service.generate_qr_code(payload.url.as_deref())?;

    Ok(Json(result.into()))
}
