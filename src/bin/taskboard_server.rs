//! Task server binary.
//!
//! Opens the JSON task file, seeding it on first run, and serves the task
//! routes until interrupted.

use clap::Parser;
use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::config::ServerConfig;
use taskboard::http::router;
use taskboard::task::adapters::JsonFileTaskSnapshotStore;
use taskboard::task::services::TaskStore;
use taskboard::telemetry::init_tracing;
use tokio::net::TcpListener;
use tracing::{info, warn};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    init_tracing()?;

    let snapshots = Arc::new(JsonFileTaskSnapshotStore::open(&config.data_file)?);
    let store = TaskStore::open(snapshots, Arc::new(DefaultClock), config.seed_policy()).await?;
    info!(data_file = %config.data_file, "task store ready");

    let listener = TcpListener::bind(config.addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router(Arc::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
    }
}
