mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::{json, Value};

fn suggestion(title: &str) -> Value {
    json!({
        "title": title,
        "kind": "Documentário",
        "category": "Corrida",
        "synopsis": "A história de Kilian Jornet",
        "platform": "YouTube",
        "year": 2019,
        "image_url": "/uploads/media_1.jpg",
        "external_link": "https://example.com/watch",
    })
}

#[tokio::test]
async fn test_user_suggestion_waits_for_approval() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let user = app.user_token().await;

    let (status, created) = app.post("/api/media", Some(&user), suggestion("Path to Everest")).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();

    let (_, public) = app.get("/api/media", None).await;
    assert!(public.as_array().unwrap().is_empty());

    let (_, all) = app.get("/api/admin/media", Some(&admin)).await;
    assert_eq!(all[0]["status"], "pendente");
    assert_eq!(all[0]["approved_by_admin"], false);
    assert_eq!(all[0]["submitted_by"], "Runner Guest");
    assert_eq!(all[0]["kind"], "Documentário");

    let (status, _) = app
        .send(
            axum::http::Method::POST,
            &format!("/api/admin/media/{}/approve", id),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, public) = app.get("/api/media", None).await;
    assert_eq!(public.as_array().unwrap().len(), 1);
    assert_eq!(public[0]["status"], "ativo");
    assert_eq!(public[0]["approved_by_admin"], true);
}

#[tokio::test]
async fn test_admin_suggestion_is_published_immediately() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, _) = app.post("/api/media", Some(&admin), suggestion("Free Solo")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, public) = app.get("/api/media", None).await;
    assert_eq!(public[0]["title"], "Free Solo");
    assert_eq!(public[0]["approved_by_admin"], true);
}

#[tokio::test]
async fn test_anonymous_suggestion_is_pending() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, _) = app.post("/api/media", None, suggestion("Brutal")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, all) = app.get("/api/admin/media", Some(&admin)).await;
    assert_eq!(all[0]["submitted_by"], "anonymous");
    assert_eq!(all[0]["status"], "pendente");
}

#[tokio::test]
async fn test_rejects_missing_title_and_unknown_kind() {
    let app = TestApp::new().await;

    let (status, _) = app.post("/api/media", None, suggestion("  ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut body = suggestion("Podcast");
    body["kind"] = json!("Podcast");
    let (status, _) = app.post("/api/media", None, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_approve_unknown_media_is_not_found() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, _) = app
        .send(axum::http::Method::POST, "/api/admin/media/77/approve", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/api/admin/media/77", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
}
