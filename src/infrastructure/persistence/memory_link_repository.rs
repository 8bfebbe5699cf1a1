//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local link storage backed by a sharded concurrent map.
///
/// Insertion goes through the map's entry API, so the existence check and the
/// write happen under the same shard lock. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, Link>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.short_id) {
            Entry::Occupied(occupied) => Err(AppError::short_id_taken(occupied.key())),
            Entry::Vacant(vacant) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                let link = Link::new(
                    id,
                    vacant.key().clone(),
                    new_link.original_url,
                    Utc::now(),
                );
                vacant.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(short_id).map(|entry| entry.value().clone()))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self.links.iter().map(|e| e.value().clone()).collect();
        links.sort_by(|a, b| b.id.cmp(&a.id));
        links.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
