//! # Blog Server
//!
//! Actix-web HTTP server exposing CRUD endpoints for blog posts.

pub mod config;
pub mod handlers;
pub mod lifecycle;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use lifecycle::{Application, LifecycleError, RunningServer};
pub use state::AppState;
