use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Bounds both connecting and acquiring a pooled connection.
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Pooled connection to the posts database.
///
/// Created once at startup and released with [`DatabasePool::close`] on shutdown.
#[cfg(feature = "postgres")]
pub struct DatabasePool {
    conn: DbConn,
}

#[cfg(feature = "postgres")]
impl DatabasePool {
    /// Open the pool and verify the database answers.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        conn.ping().await?;
        tracing::info!(
            backend = ?conn.get_database_backend(),
            "Database connected (pool: {})",
            config.max_connections
        );

        Ok(Self { conn })
    }

    /// Handle for repositories. Clones share the same pool.
    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    pub async fn close(self) -> Result<(), DbErr> {
        tracing::info!("Closing database connection");
        self.conn.close().await
    }
}
