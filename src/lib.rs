//! # Pydantic Errors Redirect
//!
//! A small redirect dispatcher: error URLs baked into pydantic releases
//! (`/{variant}/{kind}/{identifier}`) are mapped to the matching page and
//! anchor of the versioned documentation and answered with a temporary
//! redirect. The root path serves a plain informational message and
//! `/download-count/` proxies the package's recent download count.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - version/kind lookup tables and target
//!   URL construction
//! - **Infrastructure Layer** ([`infrastructure`]) - download statistics
//!   fetched from the PyPI stats API
//! - **API Layer** ([`api`]) - HTTP handlers and request tracing middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: identifier shown in the root message
//! export RELEASE_SHA="$(git rev-parse HEAD)"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::{DocsMap, Kind};
    pub use crate::error::AppError;
    pub use crate::infrastructure::downloads::DownloadCountService;
    pub use crate::state::AppState;
}
