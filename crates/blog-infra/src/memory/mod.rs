//! In-memory implementations - used when no database is configured.

mod posts;

pub use posts::InMemoryPostRepository;
