use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use super::{require, JsonBody, SuccessResponse};
use crate::auth::AdminUser;
use crate::entities::{promotions, Promotion};
use crate::error::AppError;
use crate::scraper::{self, PageMetadata};
use crate::state::AppState;

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromotion {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub original_price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FetchMetadataRequest {
    /// Product page to read Open Graph tags from
    pub url: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/promotions", get(list_active))
        .route("/admin/promotions", get(list_all).post(create_promotion))
        .route("/admin/promotions/{id}", delete(delete_promotion))
        .route("/admin/fetch-metadata", post(fetch_metadata))
}

/// Active promotions, newest first
#[utoipa::path(
    get,
    path = "/api/promotions",
    operation_id = "list_active_promotions",
    tag = "Promotions",
    responses((status = 200, description = "Active promotions", body = Vec<promotions::Model>))
)]
pub async fn list_active(
    State(state): State<AppState>,
) -> Result<Json<Vec<promotions::Model>>, AppError> {
    let rows = Promotion::find()
        .filter(promotions::Column::Active.eq(true))
        .order_by_desc(promotions::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(rows))
}

/// Every promotion
#[utoipa::path(
    get,
    path = "/api/admin/promotions",
    operation_id = "list_all_promotions",
    tag = "Admin",
    responses((status = 200, description = "All promotions", body = Vec<promotions::Model>))
)]
pub async fn list_all(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<promotions::Model>>, AppError> {
    let rows = Promotion::find()
        .order_by_desc(promotions::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(rows))
}

/// Publish a promotion
#[utoipa::path(
    post,
    path = "/api/admin/promotions",
    tag = "Admin",
    request_body = CreatePromotion,
    responses(
        (status = 200, description = "Promotion created", body = SuccessResponse),
        (status = 400, description = "Missing title")
    )
)]
#[tracing::instrument(skip(state, _admin, request), fields(title = %request.title))]
pub async fn create_promotion(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreatePromotion>,
) -> Result<Json<SuccessResponse>, AppError> {
    require("title", &request.title)?;

    let created = promotions::ActiveModel {
        title: Set(request.title),
        description: Set(request.description),
        price: Set(request.price),
        original_price: Set(request.original_price),
        category: Set(request.category),
        link: Set(request.link),
        image_url: Set(request.image_url),
        active: Set(request.active),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(promotion_id = created.id, "Created promotion");
    Ok(Json(SuccessResponse::created(created.id)))
}

/// Remove a promotion
#[utoipa::path(
    delete,
    path = "/api/admin/promotions/{id}",
    tag = "Admin",
    params(("id" = i32, Path, description = "Promotion id")),
    responses((status = 200, description = "Deleted (or nothing to delete)", body = SuccessResponse))
)]
#[tracing::instrument(skip(state, _admin))]
pub async fn delete_promotion(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    let result = Promotion::delete_by_id(id).exec(&state.db).await?;
    info!(rows = result.rows_affected, "Deleted promotion {}", id);
    Ok(Json(SuccessResponse::ok()))
}

/// Read title, description and image from a product page
#[utoipa::path(
    post,
    path = "/api/admin/fetch-metadata",
    tag = "Admin",
    request_body = FetchMetadataRequest,
    responses(
        (status = 200, description = "Extracted metadata; missing tags are empty strings", body = PageMetadata),
        (status = 400, description = "Invalid URL"),
        (status = 500, description = "Page could not be fetched")
    )
)]
#[tracing::instrument(skip(state, _admin, request), fields(url = %request.url))]
pub async fn fetch_metadata(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<FetchMetadataRequest>,
) -> Result<Json<PageMetadata>, AppError> {
    require("url", &request.url)?;
    let metadata = scraper::fetch_page_metadata(&state.http_client, request.url.trim()).await?;
    Ok(Json(metadata))
}
