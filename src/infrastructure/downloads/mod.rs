//! Download statistics for the `/download-count/` endpoint.
//!
//! Provides a [`DownloadCountService`] trait with two implementations:
//! - [`PypiStatsClient`] - live counts from the pypistats.org API
//! - [`StaticCount`] - fixed value for tests or degraded startup

mod pypi_stats;
mod service;
mod static_count;

pub use pypi_stats::{PypiStatsClient, format_count};
pub use service::{DownloadCountService, DownloadsError, DownloadsResult, FALLBACK_COUNT};
pub use static_count::StaticCount;
