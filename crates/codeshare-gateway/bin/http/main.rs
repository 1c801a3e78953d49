mod cli;

use crate::cli::CLI;
use anyhow::Context;
use clap::Parser;
use codeshare_gateway::{App, AppState};
use codeshare_generator::RandomGenerator;
use codeshare_storage::{InMemoryRepository, TimeoutRepository};
use codeshare_store::{ShareStore, StoreConfig, Sweeper};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    codeshare_telemetry::init(config.log_format)?;

    let store_config = StoreConfig::builder()
        .max_payload_bytes(config.max_payload_bytes)
        .max_id_attempts(config.max_id_attempts)
        .sweep_interval(Duration::from_secs(config.sweep_interval_secs))
        .build();

    let repository = TimeoutRepository::new(
        InMemoryRepository::new(),
        Duration::from_millis(config.storage_timeout_ms),
    );
    let generator = RandomGenerator::with_length(config.id_length)
        .context("invalid --id-length")?;
    let store = Arc::new(ShareStore::new(repository, generator, store_config.clone()));

    let sweeper = Sweeper::spawn(Arc::clone(&store), store_config.sweep_interval);

    let router = App::router(
        AppState::new(store),
        App::body_limit_for(store_config.max_payload_bytes),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    info!(
        listen_addr = %listener.local_addr()?,
        max_payload_bytes = store_config.max_payload_bytes,
        id_length = config.id_length,
        sweep_interval_secs = config.sweep_interval_secs,
        storage_timeout_ms = config.storage_timeout_ms,
        "starting gateway server"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.shutdown().await;
    info!("gateway shut down");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C signal"),
        () = terminate => info!("received SIGTERM signal"),
    }
}
