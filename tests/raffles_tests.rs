mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

async fn create_raffle(app: &TestApp, admin: &str, total: i32) -> i64 {
    let (status, body) = app
        .post(
            "/api/admin/raffles",
            Some(admin),
            json!({
                "product": "Garmin Forerunner 265",
                "description": "Relógio GPS",
                "value_number": 10.0,
                "total_numbers": total,
                "draw_date": "2026-12-20",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_and_list_raffles() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    create_raffle(&app, &admin, 100).await;

    let (status, raffles) = app.get("/api/raffles", None).await;

    assert_eq!(status, StatusCode::OK);
    let raffle = &raffles[0];
    assert_eq!(raffle["product"], "Garmin Forerunner 265");
    assert_eq!(raffle["total_numbers"], 100);
    assert_eq!(raffle["sold_numbers"], 0);
    assert_eq!(raffle["status"], "Ativo");
}

#[tokio::test]
async fn test_create_validates_product_and_total() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, _) = app
        .post(
            "/api/admin/raffles",
            Some(&admin),
            json!({ "product": "", "value_number": 5.0, "total_numbers": 10 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/api/admin/raffles",
            Some(&admin),
            json!({ "product": "Tênis", "value_number": 5.0, "total_numbers": 0 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sold_numbers_stay_within_total() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let id = create_raffle(&app, &admin, 50).await;
    let uri = format!("/api/admin/raffles/{}/sold", id);

    let (status, _) = app.post(&uri, Some(&admin), json!({ "sold_numbers": 50 })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.post(&uri, Some(&admin), json!({ "sold_numbers": 51 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.post(&uri, Some(&admin), json!({ "sold_numbers": -1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, raffles) = app.get("/api/raffles", None).await;
    assert_eq!(raffles[0]["sold_numbers"], 50);
}

#[tokio::test]
async fn test_sold_update_on_unknown_raffle_is_not_found() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, _) = app
        .post("/api/admin/raffles/404/sold", Some(&admin), json!({ "sold_numbers": 1 }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_raffle_succeeds() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let id = create_raffle(&app, &admin, 10).await;

    let (status, _) = app.delete("/api/admin/raffles/999", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.delete(&format!("/api/admin/raffles/{}", id), Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, raffles) = app.get("/api/raffles", None).await;
    assert!(raffles.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_non_admin_cannot_create_raffle() {
    let app = TestApp::new().await;
    let _admin = app.admin_token().await;
    let user = app.user_token().await;

    let (status, _) = app
        .post(
            "/api/admin/raffles",
            Some(&user),
            json!({ "product": "Tênis", "value_number": 5.0, "total_numbers": 10 }),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
