mod common;

use axum::http::StatusCode;
use common::TestApp;
use runnerpro::error::AppError;
use runnerpro::scraper::fetch_page_metadata;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRODUCT_PAGE: &str = r#"<!doctype html>
<html><head>
  <title>Loja | Tênis</title>
  <meta property="og:title" content="Nike Pegasus 41">
  <meta property="og:description" content="Amortecimento para o dia a dia">
  <meta property="og:image" content="/images/pegasus.jpg">
</head><body></body></html>"#;

#[tokio::test]
async fn test_extracts_open_graph_from_live_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/produto/pegasus"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRODUCT_PAGE))
        .mount(&server)
        .await;

    let url = format!("{}/produto/pegasus", server.uri());
    let metadata = fetch_page_metadata(&reqwest::Client::new(), &url).await.unwrap();

    assert_eq!(metadata.title, "Nike Pegasus 41");
    assert_eq!(metadata.description, "Amortecimento para o dia a dia");
    assert_eq!(metadata.image, format!("{}/images/pegasus.jpg", server.uri()));
}

#[tokio::test]
async fn test_page_without_tags_yields_empty_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>oi</body></html>"))
        .mount(&server)
        .await;

    let metadata = fetch_page_metadata(&reqwest::Client::new(), &server.uri())
        .await
        .unwrap();

    assert_eq!(metadata.title, "");
    assert_eq!(metadata.description, "");
    assert_eq!(metadata.image, "");
}

#[tokio::test]
async fn test_invalid_url_is_rejected() {
    let client = reqwest::Client::new();

    let result = fetch_page_metadata(&client, "not a url").await;
    assert!(matches!(result, Err(AppError::InvalidRequest(_))));

    let result = fetch_page_metadata(&client, "ftp://example.com/file").await;
    assert!(matches!(result, Err(AppError::InvalidRequest(_))));
}

#[tokio::test]
async fn test_unreachable_host_is_upstream_error() {
    // Port 9 (discard) on localhost is not expected to accept connections
    let result = fetch_page_metadata(&reqwest::Client::new(), "http://127.0.0.1:9/").await;
    assert!(matches!(result, Err(AppError::UpstreamError(_))));
}

#[tokio::test]
async fn test_fetch_metadata_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRODUCT_PAGE))
        .mount(&server)
        .await;
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, body) = app
        .post("/api/admin/fetch-metadata", Some(&admin), json!({ "url": server.uri() }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Nike Pegasus 41");

    let (status, _) = app
        .post("/api/admin/fetch-metadata", Some(&admin), json!({ "url": "::::" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
