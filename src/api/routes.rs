//! API route configuration.

use crate::api::handlers::{link_handler, qrcode_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`           - Register a URL
/// - `GET  /links/{short_id}`  - Resolve an identifier to its URL
/// - `POST /qrcode`            - Render a URL as a QR code data URI
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links/{short_id}", get(link_handler))
        .route("/qrcode", post(qrcode_handler))
}
