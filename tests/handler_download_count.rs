mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use mockall::mock;
use pydantic_errors_redirect::infrastructure::downloads::{
    DownloadCountService, DownloadsError, DownloadsResult, FALLBACK_COUNT,
};
use pydantic_errors_redirect::routes::app_router;

mock! {
    pub Downloads {}

    #[async_trait]
    impl DownloadCountService for Downloads {
        async fn count(&self) -> DownloadsResult<String>;
    }
}

#[tokio::test]
async fn test_download_count() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server.get("/download-count/").await;

    response.assert_status_ok();
    response.assert_text(common::TEST_COUNT);
    assert!(response.text().contains('M'));
}

#[tokio::test]
async fn test_download_count_without_trailing_slash() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server.get("/download-count").await;

    response.assert_status_ok();
    response.assert_text(common::TEST_COUNT);
}

#[tokio::test]
async fn test_download_count_failure_returns_placeholder() {
    let mut downloads = MockDownloads::new();
    downloads
        .expect_count()
        .returning(|| Err(DownloadsError::Connection("connection refused".to_string())));

    let app = app_router(common::state_with_downloads(Arc::new(downloads)));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/download-count/").await;

    response.assert_status_ok();
    response.assert_text(FALLBACK_COUNT);
}

#[tokio::test]
async fn test_download_count_never_matches_as_variant() {
    let server = TestServer::new(common::test_app()).unwrap();

    // Two-segment paths under /download-count fall through to the variant
    // lookup, which does not know this token.
    let response = server.get("/download-count/u").await;

    response.assert_status_not_found();
    response.assert_text("Not Found");
}
