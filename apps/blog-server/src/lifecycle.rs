//! Server lifecycle: [`Application::build`] (init) → [`Application::start`]
//! (running) → [`RunningServer::stop`] / [`RunningServer::wait`] (stopped).
//!
//! The listener and the database pool are acquired together in `build` and
//! released together on the way out: listener first, then the pool.

use std::io;
use std::net::TcpListener;

use actix_rt::task::JoinHandle;
use actix_web::{App, HttpServer, dev::ServerHandle, web};
use tracing_actix_web::TracingLogger;

#[cfg(feature = "postgres")]
use std::sync::Arc;

#[cfg(feature = "postgres")]
use blog_infra::{DatabasePool, PostgresPostRepository};

use crate::config::AppConfig;
use crate::handlers;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Startup and shutdown failures.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("database error: {0}")]
    Database(String),

    #[error("server error: {0}")]
    Server(#[from] io::Error),
}

/// Initialized server: socket bound, store connected, not yet serving.
pub struct Application {
    listener: TcpListener,
    state: AppState,
    #[cfg(feature = "postgres")]
    pool: Option<DatabasePool>,
}

impl Application {
    pub async fn build(config: &AppConfig) -> Result<Self, LifecycleError> {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr).map_err(|source| LifecycleError::Bind {
            addr: addr.clone(),
            source,
        })?;

        #[cfg(feature = "postgres")]
        let (state, pool) = match &config.database {
            Some(db_config) => {
                let pool = DatabasePool::connect(db_config)
                    .await
                    .map_err(|e| LifecycleError::Database(e.to_string()))?;
                let repo = Arc::new(PostgresPostRepository::new(pool.conn().clone()));
                (AppState::new(repo), Some(pool))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (AppState::in_memory(), None)
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            AppState::in_memory()
        };

        tracing::info!(%addr, "Application initialized");

        Ok(Self {
            listener,
            state,
            #[cfg(feature = "postgres")]
            pool,
        })
    }

    pub fn port(&self) -> io::Result<u16> {
        Ok(self.listener.local_addr()?.port())
    }

    /// Begin serving. Must be called from within an actix system.
    pub fn start(self) -> Result<RunningServer, LifecycleError> {
        let port = self.port()?;
        let state = self.state;

        let server = HttpServer::new(move || {
            App::new()
                .wrap(RequestIdMiddleware)
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(state.clone()))
                .configure(handlers::configure_routes)
        })
        .listen(self.listener)?
        .run();

        let handle = server.handle();
        let task = actix_rt::spawn(server);

        tracing::info!(port, "Listening");

        Ok(RunningServer {
            port,
            handle,
            task,
            #[cfg(feature = "postgres")]
            pool: self.pool,
        })
    }
}

/// Serving server. Dropping it without `stop`/`wait` leaks the pool until exit.
pub struct RunningServer {
    port: u16,
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
    #[cfg(feature = "postgres")]
    pool: Option<DatabasePool>,
}

impl RunningServer {
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Graceful stop, then release the pool.
    pub async fn stop(self) -> Result<(), LifecycleError> {
        tracing::info!("Closing server");
        self.handle.stop(true).await;
        self.shutdown().await
    }

    /// Serve until the server exits on its own (SIGINT/SIGTERM), then release the pool.
    pub async fn wait(self) -> Result<(), LifecycleError> {
        self.shutdown().await
    }

    async fn shutdown(self) -> Result<(), LifecycleError> {
        let served = match self.task.await {
            Ok(result) => result.map_err(LifecycleError::Server),
            Err(e) => Err(LifecycleError::Server(io::Error::other(e.to_string()))),
        };
        tracing::info!("HTTP server stopped");

        #[cfg(feature = "postgres")]
        if let Some(pool) = self.pool {
            pool.close()
                .await
                .map_err(|e| LifecycleError::Database(e.to_string()))?;
        }

        served
    }
}
