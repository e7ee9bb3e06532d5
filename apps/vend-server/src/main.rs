//! # Vend Server binary
//!
//! Parses configuration, seeds the catalog and serves the API until
//! Ctrl+C or SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use vend_server::config::ServerConfig;
use vend_server::telemetry::init_tracing;
use vend_server::build_app;
use vend_store::{seed_demo_catalog, InMemoryStore, ProductStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_tracing(&config.log_level);

    info!(
        port = config.port,
        bind = %config.bind_addr,
        seed = !config.no_seed,
        "Starting Vend server..."
    );

    let store: Arc<dyn ProductStore> = Arc::new(InMemoryStore::new());
    if !config.no_seed {
        let seeded = seed_demo_catalog(store.as_ref()).context("failed to seed demo catalog")?;
        info!(count = seeded.len(), "Demo catalog loaded");
    }

    let app = build_app(store);

    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    info!(addr = %bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
