//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - No external dependencies, in-memory only

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use memory::InMemoryPostRepository;

pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use database::{DatabasePool, PostgresPostRepository};

