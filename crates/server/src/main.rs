//! Movie lookup HTTP server.
//!
//! Loads `.env`, parses configuration, and serves the API until Ctrl-C.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use server::{MovieAggregator, ServerConfig, DEFAULT_LOG_FILTER};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply
    let dotenv = dotenvy::dotenv();

    server::init_tracing(DEFAULT_LOG_FILTER);
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("Ignoring unreadable .env file: {}", e);
        }
    }

    let config = ServerConfig::parse();

    let aggregator = MovieAggregator::from_config(&config.providers.to_config())
        .context("Failed to set up upstream clients")?;
    let app = server::router(aggregator);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
