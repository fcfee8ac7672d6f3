//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(Self::database_config);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            database,
        }
    }

    /// Database settings for `url`, with pool tuning taken from `DB_*` variables.
    pub fn database_config(url: String) -> DatabaseConfig {
        let defaults = DatabaseConfig::new(url);
        DatabaseConfig {
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(defaults.max_connections),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(defaults.min_connections),
            connect_timeout: parse_var("DB_CONNECT_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
            ..defaults
        }
    }

    /// Ephemeral-port, in-memory configuration for tests.
    pub fn local() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: None,
        }
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable environment variable");
            None
        }
    }
}
