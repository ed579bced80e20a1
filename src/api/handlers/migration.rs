//! Handlers for migration guide redirects.

use axum::extract::{Path, State};
use axum::response::Response;
use tracing::debug;

use super::redirect::temporary_redirect;
use crate::domain::Kind;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects `/{variant}/migration` (trailing slash accepted) to the
/// migration guide with no anchor.
pub async fn migration_handler(
    Path(variant): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    migration_redirect(&state, &variant, "")
}

/// Redirects `/{variant}/migration/{anchor}` to a section of the migration
/// guide.
pub async fn migration_anchor_handler(
    Path((variant, anchor)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    migration_redirect(&state, &variant, &anchor)
}

fn migration_redirect(state: &AppState, variant: &str, anchor: &str) -> Result<Response, AppError> {
    let docs_base = state
        .docs
        .docs_base(variant)
        .ok_or(AppError::UnknownVariant)?;

    let target = Kind::Migration.target_url(docs_base, anchor);
    debug!(variant, %target, "redirecting to migration guide");

    temporary_redirect(&target)
}
