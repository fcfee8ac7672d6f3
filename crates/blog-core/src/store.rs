//! Post store - CRUD over blog posts on top of any [`PostRepository`].
//!
//! Owns everything that sits between raw client input and storage:
//! identifier parsing, required-field validation and the path/body id check.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostDraft, BlogPostPatch};
use crate::error::DomainError;
use crate::ports::PostRepository;

const ENTITY: &str = "BlogPost";

#[derive(Clone)]
pub struct PostStore {
    repo: Arc<dyn PostRepository>,
}

impl PostStore {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<BlogPost>, DomainError> {
        Ok(self.repo.list_all().await?)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<BlogPost, DomainError> {
        let id = parse_id(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    /// Validates `draft` before anything reaches the repository.
    pub async fn create(&self, draft: BlogPostDraft) -> Result<BlogPost, DomainError> {
        let post = BlogPost::new(draft.validate()?);
        Ok(self.repo.insert(post).await?)
    }

    /// `body_id` must be present and equal to `path_id`; nothing is written otherwise.
    pub async fn update_by_id(
        &self,
        path_id: &str,
        body_id: Option<&str>,
        patch: BlogPostPatch,
    ) -> Result<BlogPost, DomainError> {
        if body_id != Some(path_id) {
            return Err(DomainError::IdMismatch {
                path_id: path_id.to_string(),
                body_id: body_id.map(str::to_string),
            });
        }
        let id = parse_id(path_id)?;
        patch.validate()?;

        if patch.is_empty() {
            return self
                .repo
                .find_by_id(id)
                .await?
                .ok_or(DomainError::NotFound {
                    entity_type: ENTITY,
                    id,
                });
        }

        self.repo
            .update_by_id(id, patch)
            .await
            .map_err(|e| DomainError::from_repo(e, ENTITY, id))
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        let id = parse_id(id)?;
        self.repo
            .delete_by_id(id)
            .await
            .map_err(|e| DomainError::from_repo(e, ENTITY, id))
    }
}

fn parse_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::InvalidId(raw.to_string()))
}
