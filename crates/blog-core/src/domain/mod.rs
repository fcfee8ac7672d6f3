//! Domain entities - the core business objects.

mod blog_post;
mod representation;

pub use blog_post::{Author, BlogPost, BlogPostDraft, BlogPostPatch, NewBlogPost};
pub use representation::PostRepresentation;
