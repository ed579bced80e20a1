//! Download count service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Served in place of a count when the upstream source is unavailable.
pub const FALLBACK_COUNT: &str = "unknown";

/// Errors that can occur while fetching download statistics.
#[derive(Debug, Error)]
pub enum DownloadsError {
    #[error("download stats connection error: {0}")]
    Connection(String),
    #[error("download stats response error: {0}")]
    Response(String),
}

/// Result type for download count operations.
pub type DownloadsResult<T> = Result<T, DownloadsError>;

/// Source of the download count shown at `/download-count/`.
///
/// Implementations must be thread-safe and fail soft: callers replace any
/// error with [`FALLBACK_COUNT`] instead of surfacing it to the client, so
/// an error here never becomes a 5xx.
///
/// # Implementations
///
/// - [`crate::infrastructure::downloads::PypiStatsClient`] - live PyPI download statistics
/// - [`crate::infrastructure::downloads::StaticCount`] - fixed value for tests or degraded startup
#[async_trait]
pub trait DownloadCountService: Send + Sync {
    /// Returns a non-empty human-readable download count such as `12.3M`.
    async fn count(&self) -> DownloadsResult<String>;
}
