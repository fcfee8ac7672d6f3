use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch};
use crate::error::RepoError;

/// Storage port for blog posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every stored post, oldest first.
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Persist a new post and return it as stored.
    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Apply `patch` to an existing post. Fails with `RepoError::NotFound` if absent.
    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError>;

    /// Fails with `RepoError::NotFound` if absent.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError>;
}
