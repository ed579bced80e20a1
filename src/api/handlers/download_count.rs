//! Handler for the download count endpoint.

use axum::extract::State;
use tracing::warn;

use crate::infrastructure::downloads::FALLBACK_COUNT;
use crate::state::AppState;

/// Returns the package download count as plain text.
///
/// # Endpoint
///
/// `GET /download-count/`
///
/// Upstream failures never reach the client: the placeholder value is
/// served instead of a 5xx.
pub async fn download_count_handler(State(state): State<AppState>) -> String {
    match state.downloads.count().await {
        Ok(count) => count,
        Err(e) => {
            warn!("Download count unavailable: {e}");
            FALLBACK_COUNT.to_string()
        }
    }
}
