use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::{require, JsonBody, SuccessResponse};
use crate::auth::{AdminUser, MaybeUser};
use crate::entities::{catalog, CatalogItem, ItemStatus, Plan};
use crate::error::AppError;
use crate::state::AppState;

/// A catalog item as seen by one caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub item: catalog::Model,
    /// True when the caller's plan is below `min_plan`; `prompt` is blanked then.
    pub locked: bool,
}

impl CatalogEntry {
    pub fn for_plan(mut item: catalog::Model, plan: Plan) -> Self {
        let locked = !plan.unlocks(item.min_plan);
        if locked {
            item.prompt.clear();
        }
        Self { item, locked }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCatalogItem {
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub min_plan: Plan,
    #[serde(default)]
    pub status: ItemStatus,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(list_catalog))
        .route("/admin/catalog", get(list_all).post(create_item))
        .route("/admin/catalog/{id}", delete(delete_item))
}

/// Active catalog items, locked according to the caller's plan
#[utoipa::path(
    get,
    path = "/api/catalog",
    tag = "Catalog",
    responses((status = 200, description = "Active items; anonymous callers browse as Starter", body = Vec<CatalogEntry>))
)]
pub async fn list_catalog(
    caller: MaybeUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogEntry>>, AppError> {
    let plan = caller.plan();
    let items = CatalogItem::find()
        .filter(catalog::Column::Status.eq(ItemStatus::Ativo))
        .order_by_desc(catalog::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(
        items
            .into_iter()
            .map(|item| CatalogEntry::for_plan(item, plan))
            .collect(),
    ))
}

/// Every catalog item, unredacted
#[utoipa::path(
    get,
    path = "/api/admin/catalog",
    operation_id = "list_all_catalog",
    tag = "Admin",
    responses((status = 200, description = "All items", body = Vec<catalog::Model>))
)]
pub async fn list_all(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<catalog::Model>>, AppError> {
    let items = CatalogItem::find()
        .order_by_desc(catalog::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(items))
}

/// Publish a catalog item
#[utoipa::path(
    post,
    path = "/api/admin/catalog",
    tag = "Admin",
    request_body = CreateCatalogItem,
    responses(
        (status = 200, description = "Item created", body = SuccessResponse),
        (status = 400, description = "Missing title")
    )
)]
#[tracing::instrument(skip(state, admin, request), fields(title = %request.title))]
pub async fn create_item(
    AdminUser(admin): AdminUser,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateCatalogItem>,
) -> Result<Json<SuccessResponse>, AppError> {
    require("title", &request.title)?;

    let created = catalog::ActiveModel {
        title: Set(request.title),
        image_url: Set(request.image_url),
        prompt: Set(request.prompt),
        description: Set(request.description),
        category: Set(request.category),
        style: Set(request.style),
        min_plan: Set(request.min_plan),
        status: Set(request.status),
        created_by: Set(admin.name),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(item_id = created.id, "Created catalog item");
    Ok(Json(SuccessResponse::created(created.id)))
}

/// Remove a catalog item
#[utoipa::path(
    delete,
    path = "/api/admin/catalog/{id}",
    tag = "Admin",
    params(("id" = i32, Path, description = "Catalog item id")),
    responses((status = 200, description = "Deleted (or nothing to delete)", body = SuccessResponse))
)]
#[tracing::instrument(skip(state, _admin))]
pub async fn delete_item(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    let result = CatalogItem::delete_by_id(id).exec(&state.db).await?;
    info!(rows = result.rows_affected, "Deleted catalog item {}", id);
    Ok(Json(SuccessResponse::ok()))
}
