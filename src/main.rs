//! Segment Analytics server entry point.
//!
//! Loads configuration, connects to PostgreSQL, applies migrations and
//! serves the segment API until interrupted.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use segment_analytics::adapters::{app_router, PostgresSegmentReader, SegmentAppState};
use segment_analytics::application::SegmentQuerySettings;
use segment_analytics::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config.server);

    info!(
        environment = ?config.server.environment,
        "Segment Analytics starting up"
    );

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await
        .context("failed to connect to PostgreSQL")?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run migrations")?;
        info!("Database migrations applied");
    }

    let state = SegmentAppState::new(
        Arc::new(PostgresSegmentReader::new(pool)),
        SegmentQuerySettings::from(&config.analytics),
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "Segment Analytics listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Segment Analytics shut down");
    Ok(())
}

/// `RUST_LOG` wins over the configured level; production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
