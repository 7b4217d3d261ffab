//! HTTP server for the daybook task tracker.
//!
//! Configuration comes from flags or `DAYBOOK_*` environment variables; see
//! `daybook --help`. `RUST_LOG` overrides the configured log filter.

use clap::Parser;
use daybook::config::AppConfig;
use daybook::task::{adapters::sqlite::SqliteTaskRepository, services::TaskLifecycleService};
use daybook::web::{AppState, Views, router};
use mockable::DefaultClock;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::parse();
    init_tracing(&config.log_filter);

    let repository = SqliteTaskRepository::connect(&config.database_url)?;
    repository.ensure_schema().await?;
    info!(database_url = %config.database_url, "task store ready");

    let service = TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock))
        .with_today_offset(config.today_offset);
    let views = Views::new()?;
    let app = router(AppState::new(Arc::new(service), Arc::new(views)));

    let listener = TcpListener::bind(config.bind).await?;
    info!(
        address = %listener.local_addr()?,
        today_offset = %config.today_offset,
        "listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
