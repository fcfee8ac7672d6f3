//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use blog_server::telemetry::{TelemetryConfig, init_telemetry};
use blog_server::{AppConfig, Application};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting blog API server on {}:{}",
        config.host,
        config.port
    );

    let app = match Application::build(&config).await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    app.start()?.wait().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
