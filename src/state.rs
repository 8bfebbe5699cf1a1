//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::StorageBackend;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub storage_backend: StorageBackend,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, storage_backend: StorageBackend) -> Self {
        Self {
            link_service,
            storage_backend,
        }
    }
}
