use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use super::{require, JsonBody, SuccessResponse};
use crate::auth::AdminUser;
use crate::entities::{raffles, ItemStatus, Raffle};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRaffle {
    pub product: String,
    #[serde(default)]
    pub description: String,
    pub value_number: f64,
    pub total_numbers: i32,
    #[serde(default)]
    pub sold_numbers: i32,
    pub draw_date: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSold {
    pub sold_numbers: i32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/raffles", get(list_raffles))
        .route("/admin/raffles", post(create_raffle))
        .route("/admin/raffles/{id}/sold", post(update_sold))
        .route("/admin/raffles/{id}", delete(delete_raffle))
}

/// All raffles, newest first
#[utoipa::path(
    get,
    path = "/api/raffles",
    tag = "Raffles",
    responses((status = 200, description = "All raffles", body = Vec<raffles::Model>))
)]
pub async fn list_raffles(
    State(state): State<AppState>,
) -> Result<Json<Vec<raffles::Model>>, AppError> {
    let rows = Raffle::find()
        .order_by_desc(raffles::Column::CreatedAt)
        .all(&state.db)
        .await?;
    Ok(Json(rows))
}

/// Open a raffle
#[utoipa::path(
    post,
    path = "/api/admin/raffles",
    tag = "Admin",
    request_body = CreateRaffle,
    responses(
        (status = 200, description = "Raffle created", body = SuccessResponse),
        (status = 400, description = "Missing product or invalid number counts")
    )
)]
#[tracing::instrument(skip(state, _admin, request), fields(product = %request.product))]
pub async fn create_raffle(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateRaffle>,
) -> Result<Json<SuccessResponse>, AppError> {
    require("product", &request.product)?;
    if request.total_numbers <= 0 {
        return Err(AppError::InvalidRequest(
            "total_numbers must be positive".to_string(),
        ));
    }
    if request.value_number < 0.0 {
        return Err(AppError::InvalidRequest(
            "value_number cannot be negative".to_string(),
        ));
    }
    raffles::validate_sold_numbers(request.sold_numbers, request.total_numbers)
        .map_err(AppError::InvalidRequest)?;

    let created = raffles::ActiveModel {
        product: Set(request.product),
        description: Set(request.description),
        value_number: Set(request.value_number),
        total_numbers: Set(request.total_numbers),
        sold_numbers: Set(request.sold_numbers),
        draw_date: Set(request.draw_date),
        status: Set(request.status),
        image_url: Set(request.image_url),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(raffle_id = created.id, "Created raffle");
    Ok(Json(SuccessResponse::created(created.id)))
}

/// Record how many numbers have been sold
#[utoipa::path(
    post,
    path = "/api/admin/raffles/{id}/sold",
    tag = "Admin",
    params(("id" = i32, Path, description = "Raffle id")),
    request_body = UpdateSold,
    responses(
        (status = 200, description = "Sold count updated", body = SuccessResponse),
        (status = 400, description = "Count outside 0..=total_numbers"),
        (status = 404, description = "No such raffle")
    )
)]
#[tracing::instrument(skip(state, _admin, request), fields(sold = request.sold_numbers))]
pub async fn update_sold(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(request): JsonBody<UpdateSold>,
) -> Result<Json<SuccessResponse>, AppError> {
    let raffle = Raffle::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("raffle {}", id)))?;

    raffles::validate_sold_numbers(request.sold_numbers, raffle.total_numbers)
        .map_err(AppError::InvalidRequest)?;

    let mut raffle: raffles::ActiveModel = raffle.into();
    raffle.sold_numbers = Set(request.sold_numbers);
    raffle.update(&state.db).await?;

    info!(raffle_id = id, "Updated sold numbers");
    Ok(Json(SuccessResponse::ok()))
}

/// Remove a raffle
#[utoipa::path(
    delete,
    path = "/api/admin/raffles/{id}",
    tag = "Admin",
    params(("id" = i32, Path, description = "Raffle id")),
    responses((status = 200, description = "Deleted (or nothing to delete)", body = SuccessResponse))
)]
#[tracing::instrument(skip(state, _admin))]
pub async fn delete_raffle(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    let result = Raffle::delete_by_id(id).exec(&state.db).await?;
    info!(rows = result.rows_affected, "Deleted raffle {}", id);
    Ok(Json(SuccessResponse::ok()))
}
