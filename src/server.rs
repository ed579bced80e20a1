//! HTTP server initialization and runtime setup.
//!
//! Builds the download count provider, assembles application state, and
//! runs the Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::DocsMap;
use crate::infrastructure::downloads::{DownloadCountService, PypiStatsClient, StaticCount};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let docs = Arc::new(DocsMap::builtin());

    let downloads: Arc<dyn DownloadCountService> = match PypiStatsClient::new(
        &config.download_count_url,
        Duration::from_secs(config.download_count_timeout),
        Duration::from_secs(config.download_count_ttl),
    ) {
        Ok(client) => {
            tracing::info!("Download counts from {}", config.download_count_url);
            Arc::new(client)
        }
        Err(e) => {
            tracing::warn!("Failed to build download stats client: {e}. Using placeholder.");
            Arc::new(StaticCount::placeholder())
        }
    };

    let state = AppState::new(config.release_sha, docs, downloads);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
