//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author as sent by clients: `{ "firstName": ..., "lastName": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Request to create a post. Every field is optional on the wire so that
/// the server can report which required field is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Request to update a post. `id` must repeat the id in the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Public representation of a post, as read by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub created: DateTime<Utc>,
}

/// Response of `GET /blogpost`. The server fills it with its own post view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostListResponse<T = BlogPostResponse> {
    pub blogposts: Vec<T>,
}
