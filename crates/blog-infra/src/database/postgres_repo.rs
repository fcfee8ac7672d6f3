//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Entity already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .order_by_asc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");

        let result = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let active_model: blog_post::ActiveModel = post.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn update_by_id(&self, id: Uuid, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        tracing::debug!(post_id = %id, "Updating post");

        let existing = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        // Only touched columns end up in the UPDATE statement.
        let mut active_model = existing.into_active_model();
        if let Some(title) = patch.title {
            active_model.title = Set(title);
        }
        if let Some(author) = patch.author {
            active_model.author = Set(author.into());
        }
        if let Some(content) = patch.content {
            active_model.content = Set(Some(content));
        }

        let model = active_model.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
