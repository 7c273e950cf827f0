//! Integration tests for the conditional file write endpoint.

use http::StatusCode;

use crate::helpers::TestApp;

fn seeded_app() -> TestApp {
    let app = TestApp::new();
    app.source.add_repo("myrepo");
    app.source.add_file("myrepo/notes.txt", "v1", "original");
    app
}

fn update_body(sha: &str, content: &str) -> serde_json::Value {
    serde_json::json!({
        "repo": "myrepo",
        "path": "notes.txt",
        "sha": sha,
        "content": content,
    })
}

#[tokio::test]
async fn test_update_with_current_token_succeeds() {
    let app = seeded_app();

    let response = app.post("/api/file/update", update_body("v1", "edited")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["success"], serde_json::json!(true));
    assert_eq!(app.source.content_of("myrepo/notes.txt").unwrap(), "edited");
}

#[tokio::test]
async fn test_stale_token_is_rejected_and_content_unchanged() {
    let app = seeded_app();

    let response = app.post("/api/file/update", update_body("stale", "clobbered")).await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let body = response.json();
    assert_eq!(body["success"], serde_json::json!(false));
    assert!(body["message"].as_str().unwrap().contains("stale"));
    assert_eq!(app.source.content_of("myrepo/notes.txt").unwrap(), "original");
}

#[tokio::test]
async fn test_two_editors_second_save_conflicts() {
    let app = seeded_app();

    // Both editors read v1; B saves first and wins.
    let b = app.post("/api/file/update", update_body("v1", "b wins")).await;
    assert_eq!(b.json()["success"], serde_json::json!(true));

    // A still holds v1, which is now stale.
    let a = app.post("/api/file/update", update_body("v1", "a loses")).await;
    assert_eq!(a.status, StatusCode::CONFLICT);
    assert_eq!(app.source.content_of("myrepo/notes.txt").unwrap(), "b wins");

    // After re-reading the fresh token, A's retry lands.
    let fresh = app.source.sha_of("myrepo/notes.txt").unwrap();
    let retry = app.post("/api/file/update", update_body(&fresh, "a retried")).await;
    assert_eq!(retry.json()["success"], serde_json::json!(true));
    assert_eq!(app.source.content_of("myrepo/notes.txt").unwrap(), "a retried");
}

#[tokio::test]
async fn test_update_unknown_file_is_404() {
    let app = seeded_app();

    let body = serde_json::json!({
        "repo": "myrepo",
        "path": "missing.txt",
        "sha": "v1",
        "content": "x",
    });
    let response = app.post("/api/file/update", body).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_missing_fields() {
    let app = seeded_app();

    let body = serde_json::json!({
        "repo": "myrepo",
        "path": "notes.txt",
        "sha": "",
        "content": "x",
    });
    let response = app.post("/api/file/update", body).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
