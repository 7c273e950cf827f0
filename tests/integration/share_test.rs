//! Integration tests for the share lifecycle over HTTP.

use chrono::{Duration, Utc};
use http::StatusCode;

use gitshelf_entity::share::ShareRecord;

use crate::helpers::TestApp;

fn seeded_app() -> TestApp {
    let app = TestApp::new();
    app.source.add_repo("myrepo");
    app.source.add_file("myrepo/notes.txt", "v1", "shared content");
    app
}

async fn create_share(app: &TestApp, unit: &str, value: u32) -> String {
    let response = app
        .post(
            "/api/share/create",
            serde_json::json!({"fullPath": "myrepo/notes.txt", "unit": unit, "value": value}),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text());

    let body = response.json();
    assert_eq!(body["success"], serde_json::json!(true));
    let url = body["url"].as_str().expect("url in response");
    url.rsplit("/s/").next().unwrap().to_string()
}

#[tokio::test]
async fn test_create_share_returns_absolute_url() {
    let app = seeded_app();
    let response = app
        .post(
            "/api/share/create",
            serde_json::json!({"fullPath": "myrepo/notes.txt", "unit": "day", "value": 1}),
        )
        .await;

    let body = response.json();
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("http://test.local/s/"), "unexpected url {url}");
}

#[tokio::test]
async fn test_create_share_persists_expiry() {
    let app = seeded_app();
    let id = create_share(&app, "hour", 2).await;

    let record = app.shares.get(&id).await.unwrap().expect("record stored");
    assert!(record.active);
    assert_eq!(record.visits, 0);
    let lifetime = record.expire_at.unwrap() - record.created_at;
    assert_eq!(lifetime, Duration::milliseconds(7_200_000));
}

#[tokio::test]
async fn test_forever_share_never_expires() {
    let app = seeded_app();
    let id = create_share(&app, "forever", 1).await;
    let record = app.shares.get(&id).await.unwrap().unwrap();
    assert!(record.expire_at.is_none());
}

#[tokio::test]
async fn test_access_streams_same_bytes_as_direct_fetch() {
    let app = seeded_app();
    let id = create_share(&app, "day", 1).await;

    let direct = app.get("/myrepo/notes.txt").await;
    assert_eq!(direct.status, StatusCode::OK);

    let shared = app.get(&format!("/s/{id}")).await;
    assert_eq!(shared.status, StatusCode::OK);
    assert_eq!(shared.bytes, direct.bytes);

    app.wait_for_visits(&id, 1).await;
}

#[tokio::test]
async fn test_each_resolution_counts_one_visit() {
    let app = seeded_app();
    let id = create_share(&app, "day", 1).await;

    for expected in 1..=3u64 {
        let response = app.get(&format!("/s/{id}")).await;
        assert_eq!(response.status, StatusCode::OK);
        app.wait_for_visits(&id, expected).await;
    }
}

#[tokio::test]
async fn test_unknown_share_is_404() {
    let app = seeded_app();
    let response = app.get("/s/doesnot1").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deactivated_share_is_403() {
    let app = seeded_app();
    let id = create_share(&app, "day", 1).await;

    let response = app
        .post("/api/share/toggle", serde_json::json!({"id": id, "active": false}))
        .await;
    assert_eq!(response.json()["success"], serde_json::json!(true));

    let response = app.get(&format!("/s/{id}")).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // Re-enable and access again.
    app.post("/api/share/toggle", serde_json::json!({"id": id, "active": true}))
        .await;
    let response = app.get(&format!("/s/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_toggle_unknown_id_reports_failure_and_creates_nothing() {
    let app = seeded_app();

    let response = app
        .post("/api/share/toggle", serde_json::json!({"id": "ghost123", "active": false}))
        .await;
    assert_eq!(response.json()["success"], serde_json::json!(false));
    assert!(app.shares.get("ghost123").await.unwrap().is_none());
}

#[tokio::test]
async fn test_expired_share_is_410_not_404() {
    let app = seeded_app();

    let record = ShareRecord {
        id: "expired1".to_string(),
        full_path: "myrepo/notes.txt".to_string(),
        created_at: Utc::now() - Duration::hours(3),
        expire_at: Some(Utc::now() - Duration::hours(1)),
        active: true,
        visits: 0,
    };
    app.shares.create(&record).await.unwrap();

    let response = app.get("/s/expired1").await;
    assert_eq!(response.status, StatusCode::GONE);
}

#[tokio::test]
async fn test_delete_share_then_access_is_404() {
    let app = seeded_app();
    let id = create_share(&app, "day", 1).await;

    let response = app
        .post("/api/share/delete", serde_json::json!({"id": id}))
        .await;
    assert_eq!(response.json()["success"], serde_json::json!(true));

    let response = app.get(&format!("/s/{id}")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_still_succeeds() {
    let app = seeded_app();
    let response = app
        .post("/api/share/delete", serde_json::json!({"id": "ghost123"}))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["success"], serde_json::json!(true));
}

#[tokio::test]
async fn test_share_of_missing_source_file_is_404_on_access() {
    let app = seeded_app();

    let record = ShareRecord {
        id: "orphan01".to_string(),
        full_path: "myrepo/gone.txt".to_string(),
        created_at: Utc::now(),
        expire_at: None,
        active: true,
        visits: 0,
    };
    app.shares.create(&record).await.unwrap();

    let response = app.get("/s/orphan01").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_share_manager_page_lists_records() {
    let app = seeded_app();
    let id = create_share(&app, "day", 1).await;

    let response = app.get("/admin/shares").await;
    assert_eq!(response.status, StatusCode::OK);
    let html = response.text();
    assert!(html.contains(&id));
    assert!(html.contains("notes.txt"));
}
