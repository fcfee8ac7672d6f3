//! # Blog Core
//!
//! The domain layer of the blog API.
//! Pure business logic: entities, validation, and the repository port.
//! No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::DomainError;
pub use store::PostStore;
