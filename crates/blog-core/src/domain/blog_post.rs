use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a post. Both name parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    /// `"{first} {last}"` with surrounding whitespace trimmed.
    /// A missing part is treated as an empty string.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

/// Blog post entity as persisted by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: Option<String>,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a fresh id, stamped with the current time.
    pub fn new(post: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: post.author,
            title: post.title,
            content: Some(post.content),
            created: Utc::now(),
        }
    }

    /// Apply the supplied fields of `patch`. `id` and `created` are never touched.
    pub fn apply(&mut self, patch: BlogPostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(content) = patch.content {
            self.content = Some(content);
        }
    }
}

/// Unvalidated creation input, as received from a client.
#[derive(Debug, Clone, Default)]
pub struct BlogPostDraft {
    pub title: Option<String>,
    pub author: Option<Author>,
    pub content: Option<String>,
}

impl BlogPostDraft {
    /// Check required fields in the order `title`, `author`, `content`.
    /// Only the first missing field is reported.
    pub fn validate(self) -> Result<NewBlogPost, DomainError> {
        let title = self.title.ok_or(DomainError::MissingField("title"))?;
        let author = self.author.ok_or(DomainError::MissingField("author"))?;
        let content = self.content.ok_or(DomainError::MissingField("content"))?;

        validate_title(&title)?;

        Ok(NewBlogPost {
            title,
            author,
            content,
        })
    }
}

/// Validated creation input. Only obtainable through [`BlogPostDraft::validate`].
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    title: String,
    author: Author,
    content: String,
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub author: Option<Author>,
    pub content: Option<String>,
}

impl BlogPostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.content.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.is_empty() {
        return Err(DomainError::Validation("`title` must not be empty".to_string()));
    }
    Ok(())
}
