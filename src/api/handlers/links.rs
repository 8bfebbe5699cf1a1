//! Handler for link lookup endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL registered under a short identifier.
///
/// # Endpoint
///
/// `GET /api/links/{short_id}`
///
/// # Response
///
/// ```json
/// { "originalUrl": "www.teste.com/essa-url-e-longa" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
pub async fn link_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let result = state.link_service.find_by_identifier(&short_id).await?;

    Ok(Json(result.into()))
}
