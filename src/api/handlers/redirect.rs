//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::redirect::redirect_target;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// Responds with 307 Temporary Redirect. URLs stored without a scheme are
/// sent as `https://` so the browser leaves the shortener's origin.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
/// Returns 500 if the stored URL cannot be sent as a `Location` header,
/// for example when it contains control characters.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let result = state.link_service.find_by_identifier(&short_id).await?;

    let target = redirect_target(&result.original_url);
    debug!(short_id = %short_id, target = %target, "Redirecting");

    let location = HeaderValue::try_from(target.as_ref()).map_err(|_| {
        warn!(short_id = %short_id, "Stored URL is not a valid Location header");
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "shortId": short_id }),
        )
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
