//! Link registration, resolution and QR code service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::id_generator::IdGenerator;
use crate::infrastructure::qr::QrEncoder;
use crate::utils::short_id::validate_custom_short_id;
use tracing::{debug, info, warn};

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub short_id: String,
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub original_url: String,
}

/// A rendered QR code as a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCodeResult {
    pub base64: String,
}

/// Service for registering and resolving short links.
///
/// All collaborators are injected, so tests substitute doubles for storage,
/// identifier generation and QR encoding.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    id_generator: Arc<dyn IdGenerator>,
    qr_encoder: Arc<dyn QrEncoder>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        id_generator: Arc<dyn IdGenerator>,
        qr_encoder: Arc<dyn QrEncoder>,
    ) -> Self {
        Self {
            repository,
            id_generator,
            qr_encoder,
        }
    }

    /// Registers `url` under a short identifier.
    ///
    /// A missing or empty `short_id` is replaced by a generated one, which is
    /// written without a prior lookup. A caller-supplied identifier is used
    /// unchanged once it passes validation and is not already stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the supplied identifier is malformed.
    /// Returns [`AppError::Conflict`] if the identifier is already in use, either
    /// found by the lookup or rejected by storage on write.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn register(
        &self,
        url: String,
        short_id: Option<String>,
    ) -> Result<ShortenResult, AppError> {
        let short_id = match short_id.filter(|id| !id.is_empty()) {
            Some(custom) => {
                validate_custom_short_id(&custom)?;

                if self.repository.find_by_short_id(&custom).await?.is_some() {
                    warn!(short_id = %custom, "Short ID already in use");
                    return Err(AppError::short_id_taken(&custom));
                }

                custom
            }
            None => self.id_generator.generate(),
        };

        self.repository
            .create(NewLink::new(short_id.clone(), url))
            .await?;

        info!(short_id = %short_id, "Link registered");

        Ok(ShortenResult { short_id })
    }

    /// Resolves a short identifier to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this exact identifier.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_by_identifier(&self, short_id: &str) -> Result<LookupResult, AppError> {
        let link = self
            .repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| {
                debug!(short_id = %short_id, "Short ID not found");
                AppError::link_not_found(short_id)
            })?;

        Ok(LookupResult {
            original_url: link.original_url,
        })
    }

    /// Encodes `url` as a PNG QR code data URI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::QrCode`] when `url` is absent or the encoder fails.
    /// The cause is logged but not exposed.
    pub fn generate_qr_code(&self, url: Option<&str>) -> Result<QrCodeResult, AppError> {
        let Some(url) = url else {
            warn!("QR code requested without a URL");
            return Err(AppError::qr_code_failed());
        };

        match self.qr_encoder.to_data_url(url) {
            Ok(base64) => Ok(QrCodeResult { base64 }),
            Err(e) => {
                warn!(error = %e, "QR code generation failed");
                Err(AppError::qr_code_failed())
            }
        }
    }

    /// Most recent links, newest first.
    pub async fn recent_links(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        self.repository.list_recent(limit).await
    }

    /// Total number of stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks that storage is reachable.
    pub async fn storage_health(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
