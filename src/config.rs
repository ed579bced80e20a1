//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All variables are optional; defaults make the service runnable with no
//! environment at all:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RELEASE_SHA` - Release identifier shown in the root message
//!   (default: `unknown`)
//! - `DOWNLOAD_COUNT_URL` - Upstream download statistics endpoint
//!   (default: the pypistats.org recent-downloads endpoint for `pydantic`)
//! - `DOWNLOAD_COUNT_TIMEOUT` - Upstream request timeout in seconds
//!   (default: 10)
//! - `DOWNLOAD_COUNT_TTL` - Seconds a fetched count is served from memory
//!   before refetching (default: 300)

use anyhow::{Context, Result};
use std::env;

/// Default upstream source for the `/download-count/` value.
pub const DEFAULT_DOWNLOAD_COUNT_URL: &str =
    "https://pypistats.org/api/packages/pydantic/recent";

/// Release identifier used when `RELEASE_SHA` is not set.
pub const UNKNOWN_RELEASE: &str = "unknown";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Release identifier substituted into the root informational message.
    pub release_sha: String,
    /// Upstream URL the download count is fetched from.
    pub download_count_url: String,
    /// Timeout for the upstream fetch in seconds (`DOWNLOAD_COUNT_TIMEOUT`).
    pub download_count_timeout: u64,
    /// TTL in seconds for the in-memory count cache (`DOWNLOAD_COUNT_TTL`).
    pub download_count_ttl: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let release_sha =
            env::var("RELEASE_SHA").unwrap_or_else(|_| UNKNOWN_RELEASE.to_string());

        let download_count_url = env::var("DOWNLOAD_COUNT_URL")
            .unwrap_or_else(|_| DEFAULT_DOWNLOAD_COUNT_URL.to_string());

        let download_count_timeout = env::var("DOWNLOAD_COUNT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let download_count_ttl = env::var("DOWNLOAD_COUNT_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        Self {
            listen_addr,
            log_level,
            log_format,
            release_sha,
            download_count_url,
            download_count_timeout,
            download_count_ttl,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `download_count_url` is not an http(s) URL
    /// - a timeout or TTL is zero
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Validate upstream URL
        let url = url::Url::parse(&self.download_count_url).with_context(|| {
            format!(
                "DOWNLOAD_COUNT_URL is not a valid URL: '{}'",
                self.download_count_url
            )
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "DOWNLOAD_COUNT_URL must be http(s), got scheme '{}'",
                url.scheme()
            );
        }

        if self.download_count_timeout == 0 {
            anyhow::bail!("DOWNLOAD_COUNT_TIMEOUT must be greater than 0");
        }

        if self.download_count_ttl == 0 {
            anyhow::bail!("DOWNLOAD_COUNT_TTL must be greater than 0");
        }

        // The release identifier ends up inside a plain-text body; an empty
        // value would render as "Release SHA ." which reads like a bug.
        if self.release_sha.is_empty() {
            anyhow::bail!("RELEASE_SHA must not be empty when set");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Release SHA: {}", self.release_sha);
        tracing::info!("  Download count source: {}", self.download_count_url);
        tracing::info!(
            "  Download count timeout/TTL: {}s/{}s",
            self.download_count_timeout,
            self.download_count_ttl
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
