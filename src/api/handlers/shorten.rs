//! Handler for link registration endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a URL under a generated or caller-chosen short identifier.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "www.teste.com/essa-url-e-longa", "shortId": "teste" }
/// ```
///
/// `url` is stored as given, including the empty string. `shortId` may be
/// omitted or `null` to have one generated.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortId": "teste" }
/// ```
///
/// # Errors
///
/// - 400 if the body is not valid JSON, `url` is missing, or `shortId` is malformed
/// - 409 if `shortId` is already in use
pub async fn shorten_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let result = state
        .link_service
        .register(payload.url, payload.short_id)
        .await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}
