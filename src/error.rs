//! Routing error taxonomy.
//!
//! Every failure collapses to the same plain 404 so the response never
//! reveals which lookup rejected the path.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Body of every 404 response.
pub const NOT_FOUND_BODY: &str = "Not Found";

/// Why a request path could not be mapped to a documentation URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppError {
    /// The version variant segment is not in the supported set.
    #[error("unsupported version variant")]
    UnknownVariant,
    /// The kind code is not recognized for any variant.
    #[error("unsupported documentation kind")]
    UnknownKind,
    /// The path matches no route shape, or the decoded identifier cannot be
    /// carried in a `Location` header.
    #[error("malformed request path")]
    MalformedPath,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(reason = %self, "request rejected");
        (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
    }
}
