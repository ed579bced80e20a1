//! Download counts fetched from the pypistats.org API.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

use super::service::{DownloadCountService, DownloadsError, DownloadsResult};

/// Client for the recent-downloads endpoint of pypistats.org.
///
/// Successful responses are kept in memory for the configured TTL so a
/// burst of requests does not turn into a burst of upstream calls.
pub struct PypiStatsClient {
    http: reqwest::Client,
    url: String,
    ttl: Duration,
    cached: Mutex<Option<CachedCount>>,
}

struct CachedCount {
    value: String,
    fetched_at: Instant,
}

/// Response shape of `/api/packages/{package}/recent`.
#[derive(Debug, Deserialize)]
struct RecentDownloads {
    data: RecentData,
}

#[derive(Debug, Deserialize)]
struct RecentData {
    last_month: u64,
}

impl PypiStatsClient {
    /// Creates a client fetching from `url` with the given request timeout
    /// and cache TTL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        ttl: Duration,
    ) -> DownloadsResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| DownloadsError::Connection(e.to_string()))?;

        Ok(Self {
            http,
            url: url.into(),
            ttl,
            cached: Mutex::new(None),
        })
    }
}

#[async_trait]
impl DownloadCountService for PypiStatsClient {
    async fn count(&self) -> DownloadsResult<String> {
        let mut cached = self.cached.lock().await;

        if let Some(entry) = cached.as_ref() {
            if entry.fetched_at.elapsed() < self.ttl {
                debug!("download count served from cache");
                return Ok(entry.value.clone());
            }
        }

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DownloadsError::Connection(e.to_string()))?
            .error_for_status()
            .map_err(|e| DownloadsError::Response(e.to_string()))?;

        let stats: RecentDownloads = response
            .json()
            .await
            .map_err(|e| DownloadsError::Response(e.to_string()))?;

        let value = format_count(stats.data.last_month);
        debug!(count = %value, "download count refreshed");

        *cached = Some(CachedCount {
            value: value.clone(),
            fetched_at: Instant::now(),
        });

        Ok(value)
    }
}

/// Formats a raw download count with a magnitude suffix, e.g. `12.3M`.
pub fn format_count(count: u64) -> String {
    const UNITS: &[(u64, &str)] = &[(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "k")];

    for &(scale, suffix) in UNITS {
        if count >= scale {
            return format!("{:.1}{}", count as f64 / scale as f64, suffix);
        }
    }

    count.to_string()
}
