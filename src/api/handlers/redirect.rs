//! Handlers for error documentation redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::domain::Kind;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects `/{variant}/{kind}` with an empty identifier, e.g. `/v2.0/u`.
///
/// # Errors
///
/// Returns 404 Not Found for an unsupported variant or kind code.
pub async fn error_docs_handler(
    Path((variant, kind)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    error_docs_redirect(&state, &variant, &kind, "")
}

/// Redirects `/{variant}/{kind}/{identifier}` to the matching documentation
/// entry, e.g. `/v2.0a3/u/decorator-missing-field`.
///
/// The identifier is the URL-decoded remainder of the path and becomes the
/// fragment of the destination URL.
pub async fn error_docs_anchor_handler(
    Path((variant, kind, identifier)): Path<(String, String, String)>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    error_docs_redirect(&state, &variant, &kind, &identifier)
}

fn error_docs_redirect(
    state: &AppState,
    variant: &str,
    code: &str,
    identifier: &str,
) -> Result<Response, AppError> {
    let docs_base = state
        .docs
        .docs_base(variant)
        .ok_or(AppError::UnknownVariant)?;
    let kind = Kind::from_code(code).ok_or(AppError::UnknownKind)?;

    let target = kind.target_url(docs_base, identifier);
    debug!(variant, code, %target, "redirecting to error docs");

    temporary_redirect(&target)
}

/// 307 response with `Location` set to exactly the built URL.
///
/// Identifiers arrive URL-decoded and may carry bytes that are not valid in
/// a header value; such requests degrade to 404 instead of panicking inside
/// the header constructor.
pub(super) fn temporary_redirect(target: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(target).map_err(|_| AppError::MalformedPath)?;
    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
