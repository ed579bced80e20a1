use std::sync::Arc;

use crate::domain::DocsMap;
use crate::infrastructure::downloads::DownloadCountService;

/// Shared application state.
///
/// Everything here is built once at startup and read-only afterwards, so
/// handlers clone freely.
#[derive(Clone)]
pub struct AppState {
    /// Release identifier shown in the root message.
    pub release_sha: String,
    /// Variant to documentation base lookup table.
    pub docs: Arc<DocsMap>,
    /// Source of the `/download-count/` value.
    pub downloads: Arc<dyn DownloadCountService>,
}

impl AppState {
    pub fn new(
        release_sha: String,
        docs: Arc<DocsMap>,
        downloads: Arc<dyn DownloadCountService>,
    ) -> Self {
        Self {
            release_sha,
            docs,
            downloads,
        }
    }
}
