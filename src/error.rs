//! Application error type and its HTTP representation.
//!
//! Every failure reaching a handler is an [`AppError`]. It renders as
//! `{ "error": { "code", "message", "details" } }` with a matching status.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Message returned when a caller-supplied short identifier is taken.
pub const SHORT_ID_TAKEN: &str = "Short ID já existe...";

/// Message returned when a short identifier does not resolve.
pub const LINK_NOT_FOUND: &str = "Not found..";

/// Message returned for every QR code generation failure.
pub const QR_CODE_FAILED: &str = "Erro ao gerar o QRCode";

/// Name of the unique constraint guarding `links.short_id`.
const SHORT_ID_CONSTRAINT: &str = "links_short_id_key";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    QrCode { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Conflict raised when `short_id` is already registered.
    pub fn short_id_taken(short_id: &str) -> Self {
        Self::conflict(SHORT_ID_TAKEN, json!({ "shortId": short_id }))
    }

    /// Lookup miss for `short_id`.
    pub fn link_not_found(short_id: &str) -> Self {
        Self::not_found(LINK_NOT_FOUND, json!({ "shortId": short_id }))
    }

    /// The single, cause-agnostic QR generation failure.
    pub fn qr_code_failed() -> Self {
        Self::QrCode {
            message: QR_CODE_FAILED.to_string(),
            details: json!({}),
        }
    }

    fn parts(&self) -> (StatusCode, &'static str, &str, &Value) {
        match self {
            AppError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, "validation_error", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::QrCode { message, details } => {
                (StatusCode::BAD_REQUEST, "qr_code_error", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    /// Builds the serializable payload without consuming the error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message: message.to_string(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

/// Whether `e` is a unique violation on `links.short_id`.
pub fn is_short_id_violation(e: &sqlx::Error) -> bool {
    e.as_database_error().is_some_and(|db| {
        db.is_unique_violation() && db.constraint() == Some(SHORT_ID_CONSTRAINT)
    })
}

/// Maps database errors, turning unique violations into conflicts.
///
/// Callers that know the short id should check [`is_short_id_violation`]
/// first and use [`AppError::short_id_taken`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if is_short_id_violation(&e) {
        return AppError::conflict(SHORT_ID_TAKEN, json!({}));
    }

    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error", json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_messages_are_verbatim() {
        assert_eq!(
            AppError::short_id_taken("teste").to_string(),
            "Short ID já existe..."
        );
        assert_eq!(AppError::link_not_found("abc").to_string(), "Not found..");
        assert_eq!(AppError::qr_code_failed().to_string(), "Erro ao gerar o QRCode");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::short_id_taken("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::link_not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::qr_code_failed().status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_codes() {
        assert_eq!(AppError::short_id_taken("x").to_error_info().code, "conflict");
        assert_eq!(AppError::qr_code_failed().to_error_info().code, "qr_code_error");

        let info = AppError::link_not_found("abc").to_error_info();
        assert_eq!(info.code, "not_found");
        assert_eq!(info.details["shortId"], "abc");
    }

    #[test]
    fn test_non_database_sqlx_error_is_internal() {
        assert!(!is_short_id_violation(&sqlx::Error::RowNotFound));
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
