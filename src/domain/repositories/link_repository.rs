//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence contract for links, keyed by short identifier.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - Concurrent map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link.
    ///
    /// Uniqueness of `short_id` is enforced here, atomically with the write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short identifier already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by exact short identifier match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError>;

    /// Lists the most recently created links, newest first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Counts all stored links.
    async fn count(&self) -> Result<i64, AppError>;

    /// Verifies the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
