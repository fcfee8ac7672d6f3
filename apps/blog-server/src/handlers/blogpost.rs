//! Blog post handlers.

use actix_web::{HttpResponse, web};

use blog_core::DomainError;
use blog_core::domain::{Author, BlogPostDraft, BlogPostPatch, PostRepresentation};
use blog_shared::dto::{
    AuthorPayload, BlogPostListResponse, CreateBlogPostRequest, UpdateBlogPostRequest,
};

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

/// GET /blogpost
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;

    Ok(HttpResponse::Ok().json(BlogPostListResponse {
        blogposts: posts.into_iter().map(PostRepresentation::from).collect(),
    }))
}

/// GET /blogpost/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.posts.find_by_id(&path).await?;
    Ok(HttpResponse::Ok().json(PostRepresentation::from(post)))
}

/// POST /blogpost
pub async fn create(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = BlogPostDraft {
        title: req.title,
        author: req.author.map(to_author),
        content: req.content,
    };
    let post = state.posts.create(draft).await?;

    tracing::info!(%request_id, post_id = %post.id, "Blog post created");
    Ok(HttpResponse::Created().json(PostRepresentation::from(post)))
}

/// PUT /blogpost/{id}
pub async fn update(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let patch = BlogPostPatch {
        title: req.title,
        author: req.author.map(to_author),
        content: req.content,
    };
    let post = state
        .posts
        .update_by_id(&path, req.id.as_deref(), patch)
        .await?;

    tracing::info!(%request_id, post_id = %post.id, "Blog post updated");
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blogpost/{id}
///
/// Deleting an absent post still answers 204.
pub async fn delete(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    match state.posts.delete_by_id(&path).await {
        Ok(()) => tracing::info!(%request_id, post_id = %path, "Blog post deleted"),
        Err(DomainError::NotFound { id, .. }) => {
            tracing::debug!(%request_id, post_id = %id, "Delete of absent blog post")
        }
        Err(e) => return Err(e.into()),
    }

    Ok(HttpResponse::NoContent().finish())
}

fn to_author(payload: AuthorPayload) -> Author {
    Author {
        first_name: payload.first_name,
        last_name: payload.last_name,
    }
}
