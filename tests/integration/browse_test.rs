//! Integration tests for browsing and the editor page.

use http::StatusCode;

use crate::helpers::TestApp;

fn seeded_app() -> TestApp {
    let app = TestApp::new();
    app.source.add_repo("myrepo");
    app.source.add_repo("other");
    app.source.add_file("myrepo/readme.md", "v1", "# hello");
    app.source.add_file("myrepo/docs/guide.md", "v2", "guide text");
    app.source.add_file("myrepo/docs/deep/notes.txt", "v3", "deep notes");
    app
}

#[tokio::test]
async fn test_root_lists_repositories() {
    let app = seeded_app();

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("myrepo"));
    assert!(html.contains("other"));
}

#[tokio::test]
async fn test_repository_root_lists_entries() {
    let app = seeded_app();

    let response = app.get("/myrepo").await;
    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains("readme.md"));
    assert!(html.contains("docs"));
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let app = seeded_app();

    let response = app.get("/myrepo/docs/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("guide.md"));
}

#[tokio::test]
async fn test_file_path_streams_raw_bytes() {
    let app = seeded_app();

    let response = app.get("/myrepo/readme.md").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.bytes, b"# hello");
    assert_eq!(response.content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = seeded_app();

    let response = app.get("/myrepo/nope.txt").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_repository_is_404() {
    let app = seeded_app();

    let response = app.get("/norepo").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_flag_serves_editor_with_token_and_content() {
    let app = seeded_app();

    let response = app.get("/myrepo/docs/guide.md?edit=true").await;
    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    // The save script needs the version token and the decoded content.
    assert!(html.contains("v2"));
    assert!(html.contains("guide text"));
    assert!(html.contains("/api/file/update"));
}
