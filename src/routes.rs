//! Top-level router wiring paths to handlers.
//!
//! # Route Structure
//!
//! - `/`                                 - info message with release identifier
//! - `/download-count[/]`                - plain text download count
//! - `/{variant}/migration[/{anchor}]`   - 307 to the migration guide
//! - `/{variant}/{kind}[/{identifier}]`  - 307 to error documentation
//! - anything else                       - 404 `Not Found`
//!
//! Routes are registered with [`any`]: the mapping depends only on the path,
//! so every method gets the same answer.
//!
//! Trailing-slash forms are registered explicitly. A wildcard segment does
//! not match an empty remainder, so `/v2.0/u/` needs its own route to reach
//! the empty-identifier handler.
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging

use axum::{Router, routing::any};

use crate::api::handlers::{
    download_count_handler, error_docs_anchor_handler, error_docs_handler,
    migration_anchor_handler, migration_handler, root_handler,
};
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(root_handler))
        .route("/download-count", any(download_count_handler))
        .route("/download-count/", any(download_count_handler))
        .route("/{variant}/migration", any(migration_handler))
        .route("/{variant}/migration/", any(migration_handler))
        .route("/{variant}/migration/{*anchor}", any(migration_anchor_handler))
        .route("/{variant}/{kind}", any(error_docs_handler))
        .route("/{variant}/{kind}/", any(error_docs_handler))
        .route("/{variant}/{kind}/{*identifier}", any(error_docs_anchor_handler))
        .fallback(not_found)
        .with_state(state)
        .layer(tracing::layer())
}

/// Unmatched shapes collapse to the same 404 as unknown variants and kinds.
async fn not_found() -> AppError {
    AppError::MalformedPath
}
