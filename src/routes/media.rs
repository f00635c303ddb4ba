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
use crate::auth::{AdminUser, MaybeUser};
use crate::entities::{media, Media, MediaCategory, MediaKind, MediaStatus};
use crate::error::AppError;
use crate::state::AppState;

const ANONYMOUS: &str = "anonymous";

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitMedia {
    pub title: String,
    pub kind: MediaKind,
    pub category: MediaCategory,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub platform: String,
    pub year: Option<i32>,
    #[serde(default)]
    pub image_url: String,
    pub external_link: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/media", get(list_published).post(submit_media))
        .route("/admin/media", get(list_all))
        .route("/admin/media/{id}/approve", post(approve_media))
        .route("/admin/media/{id}", delete(delete_media))
}

/// Approved films, series and documentaries
#[utoipa::path(
    get,
    path = "/api/media",
    tag = "Media",
    responses((status = 200, description = "Media with status ativo", body = Vec<media::Model>))
)]
pub async fn list_published(
    State(state): State<AppState>,
) -> Result<Json<Vec<media::Model>>, AppError> {
    let rows = Media::find()
        .filter(media::Column::Status.eq(MediaStatus::Ativo))
        .order_by_desc(media::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(rows))
}

/// Suggest a title. Admin submissions are published immediately; the rest wait for approval.
#[utoipa::path(
    post,
    path = "/api/media",
    tag = "Media",
    request_body = SubmitMedia,
    responses(
        (status = 200, description = "Suggestion stored", body = SuccessResponse),
        (status = 400, description = "Missing title or unknown kind/category")
    )
)]
#[tracing::instrument(skip(state, caller, request), fields(title = %request.title))]
pub async fn submit_media(
    caller: MaybeUser,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SubmitMedia>,
) -> Result<Json<SuccessResponse>, AppError> {
    require("title", &request.title)?;

    let approved = caller.is_admin();
    let status = if approved {
        MediaStatus::Ativo
    } else {
        MediaStatus::Pendente
    };
    let submitted_by = caller
        .0
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_else(|| ANONYMOUS.to_string());

    let created = media::ActiveModel {
        title: Set(request.title),
        kind: Set(request.kind),
        category: Set(request.category),
        synopsis: Set(request.synopsis),
        platform: Set(request.platform),
        year: Set(request.year),
        image_url: Set(request.image_url),
        external_link: Set(request.external_link.filter(|link| !link.trim().is_empty())),
        submitted_by: Set(submitted_by),
        status: Set(status),
        approved_by_admin: Set(approved),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(media_id = created.id, ?status, "Stored media suggestion");
    Ok(Json(SuccessResponse::created(created.id)))
}

/// Every media row, pending ones included
#[utoipa::path(
    get,
    path = "/api/admin/media",
    operation_id = "list_all_media",
    tag = "Admin",
    responses((status = 200, description = "All media", body = Vec<media::Model>))
)]
pub async fn list_all(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<media::Model>>, AppError> {
    let rows = Media::find()
        .order_by_desc(media::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(rows))
}

/// Publish a pending suggestion
#[utoipa::path(
    post,
    path = "/api/admin/media/{id}/approve",
    tag = "Admin",
    params(("id" = i32, Path, description = "Media id")),
    responses(
        (status = 200, description = "Media approved", body = SuccessResponse),
        (status = 404, description = "No such media")
    )
)]
#[tracing::instrument(skip(state, _admin))]
pub async fn approve_media(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    let item = Media::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("media {}", id)))?;

    let mut item: media::ActiveModel = item.into();
    item.status = Set(MediaStatus::Ativo);
    item.approved_by_admin = Set(true);
    item.update(&state.db).await?;

    info!(media_id = id, "Approved media");
    Ok(Json(SuccessResponse::ok()))
}

/// Remove a media row
#[utoipa::path(
    delete,
    path = "/api/admin/media/{id}",
    tag = "Admin",
    params(("id" = i32, Path, description = "Media id")),
    responses((status = 200, description = "Deleted (or nothing to delete)", body = SuccessResponse))
)]
#[tracing::instrument(skip(state, _admin))]
pub async fn delete_media(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    let result = Media::delete_by_id(id).exec(&state.db).await?;
    info!(rows = result.rows_affected, "Deleted media {}", id);
    Ok(Json(SuccessResponse::ok()))
}
