//! Shortener page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::utils::short_id::MAX_SHORT_ID_LENGTH;

/// Template for the shortener page.
///
/// Renders `templates/index.html` with:
/// - URL form with optional custom short ID
/// - Result panel with the short link
/// - QR code preview
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub version: &'static str,
    pub max_short_id_length: usize,
}

/// Renders the shortener page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
        max_short_id_length: MAX_SHORT_ID_LENGTH,
    }
}
