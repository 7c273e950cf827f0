//! Integration tests for the shared-secret auth gate.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_open_instance_requires_no_token() {
    let app = TestApp::new();
    app.source.add_repo("myrepo");

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_browser_path_without_token_gets_html_prompt() {
    let app = TestApp::with_secret(Some("s3cret"));

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.content_type.as_ref().unwrap().starts_with("text/html"));
    assert!(response.text().contains("Access denied"));
}

#[tokio::test]
async fn test_api_path_without_token_gets_json_forbidden() {
    let app = TestApp::with_secret(Some("s3cret"));

    let response = app
        .post(
            "/api/share/create",
            serde_json::json!({"fullPath": "myrepo/a.txt", "unit": "day", "value": 1}),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let body = response.json();
    assert_eq!(body["success"], serde_json::json!(false));
}

#[tokio::test]
async fn test_wrong_token_is_rejected() {
    let app = TestApp::with_secret(Some("s3cret"));

    let response = app.get("/?token=wrong").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_correct_token_is_accepted() {
    let app = TestApp::with_secret(Some("s3cret"));
    app.source.add_repo("myrepo");

    let response = app.get("/?token=s3cret").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("myrepo"));
}

#[tokio::test]
async fn test_share_path_bypasses_the_gate() {
    let app = TestApp::with_secret(Some("s3cret"));

    // No token at all: the share path answers from record state alone,
    // so an unknown id is 404, not 403.
    let response = app.get("/s/unknown1").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
