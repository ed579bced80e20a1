//! Fixed download count for tests or degraded startup.

use async_trait::async_trait;

use super::service::{DownloadCountService, DownloadsResult, FALLBACK_COUNT};

/// A count source that always returns the same value.
///
/// Used when the live stats client cannot be constructed, and in tests that
/// need a deterministic count.
pub struct StaticCount {
    value: String,
}

impl StaticCount {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The placeholder served when no upstream client exists.
    pub fn placeholder() -> Self {
        Self::new(FALLBACK_COUNT)
    }
}

#[async_trait]
impl DownloadCountService for StaticCount {
    async fn count(&self) -> DownloadsResult<String> {
        Ok(self.value.clone())
    }
}
