use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use super::{require, JsonBody, SuccessResponse};
use crate::auth::AdminUser;
use crate::entities::{professionals, Professional};
use crate::error::AppError;
use crate::state::AppState;

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProfessional {
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub whatsapp: String,
    pub instagram: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/professionals", get(list_active))
        .route("/admin/professionals", get(list_all).post(create_professional))
        .route("/admin/professionals/{id}", delete(delete_professional))
}

/// Active professionals
#[utoipa::path(
    get,
    path = "/api/professionals",
    operation_id = "list_active_professionals",
    tag = "Professionals",
    responses((status = 200, description = "Professionals currently taking clients", body = Vec<professionals::Model>))
)]
pub async fn list_active(
    State(state): State<AppState>,
) -> Result<Json<Vec<professionals::Model>>, AppError> {
    let rows = Professional::find()
        .filter(professionals::Column::Active.eq(true))
        .order_by_asc(professionals::Column::Name)
        .all(&state.db)
        .await?;
    Ok(Json(rows))
}

/// Every professional, inactive ones included
#[utoipa::path(
    get,
    path = "/api/admin/professionals",
    operation_id = "list_all_professionals",
    tag = "Admin",
    responses((status = 200, description = "All professionals", body = Vec<professionals::Model>))
)]
pub async fn list_all(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<professionals::Model>>, AppError> {
    let rows = Professional::find()
        .order_by_asc(professionals::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(rows))
}

/// Add a professional
#[utoipa::path(
    post,
    path = "/api/admin/professionals",
    tag = "Admin",
    request_body = CreateProfessional,
    responses(
        (status = 200, description = "Professional created", body = SuccessResponse),
        (status = 400, description = "Missing name or specialty")
    )
)]
#[tracing::instrument(skip(state, _admin, request), fields(name = %request.name))]
pub async fn create_professional(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateProfessional>,
) -> Result<Json<SuccessResponse>, AppError> {
    require("name", &request.name)?;
    require("specialty", &request.specialty)?;

    let created = professionals::ActiveModel {
        name: Set(request.name),
        specialty: Set(request.specialty),
        bio: Set(request.bio),
        whatsapp: Set(request.whatsapp),
        instagram: Set(request.instagram),
        photo_url: Set(request.photo_url),
        active: Set(request.active),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(professional_id = created.id, "Created professional");
    Ok(Json(SuccessResponse::created(created.id)))
}

/// Remove a professional
#[utoipa::path(
    delete,
    path = "/api/admin/professionals/{id}",
    tag = "Admin",
    params(("id" = i32, Path, description = "Professional id")),
    responses((status = 200, description = "Deleted (or nothing to delete)", body = SuccessResponse))
)]
#[tracing::instrument(skip(state, _admin))]
pub async fn delete_professional(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    let result = Professional::delete_by_id(id).exec(&state.db).await?;
    info!(rows = result.rows_affected, "Deleted professional {}", id);
    Ok(Json(SuccessResponse::ok()))
}
