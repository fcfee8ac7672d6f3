//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostStore;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

/// Shared application state. Cloned into every worker.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostStore,
}

impl AppState {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostStore::new(repo),
        }
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        tracing::info!("Using in-memory post repository");
        Self::new(Arc::new(InMemoryPostRepository::new()))
    }
}
