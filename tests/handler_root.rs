mod common;

use axum_test::TestServer;
use pydantic_errors_redirect::routes::app_router;

#[tokio::test]
async fn test_root_message() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text(
        "Pydantic Errors Redirect, see https://github.com/pydantic/pydantic-errors-redirect for more info. Release SHA unknown.",
    );
}

#[tokio::test]
async fn test_root_reflects_release_sha() {
    let app = app_router(common::state_with_release("0f4b1c9"));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let text = response.text();
    assert!(text.starts_with("Pydantic Errors Redirect"));
    assert!(text.ends_with("Release SHA 0f4b1c9."));
}

#[tokio::test]
async fn test_root_is_method_agnostic() {
    let server = TestServer::new(common::test_app()).unwrap();

    let response = server.post("/").await;

    response.assert_status_ok();
    assert!(response.text().starts_with("Pydantic Errors Redirect"));
}
