mod common;

use axum::http::StatusCode;
use common::{token_of, TestApp};
use runnerpro::entities::User;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

#[tokio::test]
async fn test_first_guest_is_elite_admin_then_starters() {
    let app = TestApp::new().await;

    let first = app.bootstrap().await;
    assert_eq!(first["name"], "Runner Guest");
    assert_eq!(first["role"], "admin");
    assert_eq!(first["plan"], "Elite");
    assert!(!token_of(&first).is_empty());

    let second = app.bootstrap().await;
    assert_eq!(second["role"], "user");
    assert_eq!(second["plan"], "Starter");
    assert_ne!(first["email"], second["email"]);
    assert_ne!(first["session_token"], second["session_token"]);
}

#[tokio::test]
async fn test_me_returns_token_owner() {
    let app = TestApp::new().await;
    let profile = app.bootstrap().await;
    let token = token_of(&profile);

    let (status, me) = app.get("/api/user/me", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], profile["id"]);
    assert_eq!(me["session_token"], profile["session_token"]);
    assert_eq!(User::find().count(&app.state.db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_me_with_unknown_token_is_unauthorized() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/user/me", Some("not-a-real-token")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(User::find().count(&app.state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_admin_creates_and_lists_users() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, created) = app
        .post(
            "/api/admin/users",
            Some(&admin),
            json!({ "name": "Ana Souza", "email": "ana@example.com", "plan": "Pro" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], true);

    let (status, users) = app.get("/api/admin/users", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1]["email"], "ana@example.com");
    assert_eq!(users[1]["plan"], "Pro");
    assert_eq!(users[1]["payment_status"], "Pendente");
    // Tokens never leak through listings
    assert!(users[1].get("session_token").is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_without_insert() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let body = json!({ "name": "Ana", "email": "ana@example.com" });

    let (status, _) = app.post("/api/admin/users", Some(&admin), body.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, error) = app.post("/api/admin/users", Some(&admin), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Email already registered");
    assert_eq!(User::find().count(&app.state.db).await.unwrap(), 2);
}

#[tokio::test]
async fn test_create_user_requires_name_and_email() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, _) = app
        .post("/api/admin/users", Some(&admin), json!({ "name": " ", "email": "x@example.com" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/api/admin/users", Some(&admin), json!({ "name": "Ana", "email": "" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_plan_and_role_updates() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let guest = app.bootstrap().await;
    let id = guest["id"].as_i64().unwrap();

    let (status, _) = app
        .post(&format!("/api/admin/users/{}/plan", id), Some(&admin), json!({ "plan": "Elite" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post(&format!("/api/admin/users/{}/role", id), Some(&admin), json!({ "role": "admin" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, me) = app.get("/api/user/me", Some(&token_of(&guest))).await;
    assert_eq!(me["plan"], "Elite");
    assert_eq!(me["role"], "admin");
}

#[tokio::test]
async fn test_invalid_plan_or_unknown_user() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, _) = app
        .post("/api/admin/users/1/plan", Some(&admin), json!({ "plan": "Gold" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/api/admin/users/999/role", Some(&admin), json!({ "role": "user" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_routes_require_admin() {
    let app = TestApp::new().await;
    let _admin = app.admin_token().await;
    let user = app.user_token().await;

    let (status, _) = app.get("/api/admin/users", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/admin/users", Some("bogus")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app.get("/api/admin/users", Some(&user)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_guest_bootstrap_is_rate_limited() {
    let app = TestApp::with_config(|config| config.guest_bootstrap_limit = 3).await;
    let admin = app.admin_token().await;
    app.bootstrap().await;
    app.bootstrap().await;

    for _ in 0..10 {
        let (status, body) = app.get("/api/user/me", None).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert!(body["error"].is_string());
    }
    assert_eq!(User::find().count(&app.state.db).await.unwrap(), 3);

    let (status, me) = app.get("/api/user/me", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["role"], "admin");
}

#[tokio::test]
async fn test_guest_email_does_not_leak_token() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let guest = app.bootstrap().await;
    let token = token_of(&guest);

    let (_, users) = app.get("/api/admin/users", Some(&admin)).await;
    let listed = users
        .as_array()
        .unwrap()
        .iter()
        .find(|user| user["id"] == guest["id"])
        .unwrap();
    let email = listed["email"].as_str().unwrap();

    assert!(email.starts_with("guest-"));
    assert!(!email.contains(&token[..12]));
    assert!(listed.get("session_token").is_none());
}
