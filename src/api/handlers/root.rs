//! Handler for the root informational message.

use axum::extract::State;

use crate::state::AppState;

/// Serves the fixed info message with the release identifier.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler(State(state): State<AppState>) -> String {
    format!(
        "Pydantic Errors Redirect, see https://github.com/pydantic/pydantic-errors-redirect for more info. Release SHA {}.",
        state.release_sha
    )
}
