//! Client-facing view of a stored post.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::BlogPost;

/// Derived from a [`BlogPost`] on every read; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRepresentation {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub created: DateTime<Utc>,
}

impl From<&BlogPost> for PostRepresentation {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            author: post.author.display_name(),
            title: post.title.clone(),
            content: post.content.clone(),
            created: post.created,
        }
    }
}

impl From<BlogPost> for PostRepresentation {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            author: post.author.display_name(),
            title: post.title,
            content: post.content,
            created: post.created,
        }
    }
}
