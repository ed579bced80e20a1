#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use pydantic_errors_redirect::domain::DocsMap;
use pydantic_errors_redirect::infrastructure::downloads::{DownloadCountService, StaticCount};
use pydantic_errors_redirect::routes::app_router;
use pydantic_errors_redirect::state::AppState;

/// Deterministic count served by the default test state.
pub const TEST_COUNT: &str = "12.3M";

/// Release identifier used by the default test state.
pub const TEST_RELEASE: &str = "unknown";

pub fn create_test_state() -> AppState {
    state_with_downloads(Arc::new(StaticCount::new(TEST_COUNT)))
}

pub fn state_with_downloads(downloads: Arc<dyn DownloadCountService>) -> AppState {
    AppState::new(
        TEST_RELEASE.to_string(),
        Arc::new(DocsMap::builtin()),
        downloads,
    )
}

pub fn state_with_release(release_sha: &str) -> AppState {
    AppState::new(
        release_sha.to_string(),
        Arc::new(DocsMap::builtin()),
        Arc::new(StaticCount::new(TEST_COUNT)),
    )
}

/// The full application router over the default test state.
pub fn test_app() -> Router {
    app_router(create_test_state())
}
