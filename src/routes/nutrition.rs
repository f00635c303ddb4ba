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
use crate::auth::CurrentUser;
use crate::entities::{nutrition_logs, NutritionLog};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNutritionLog {
    /// Meal name, e.g. "Café da Manhã"
    pub meal: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
    pub calories: Option<i32>,
    pub observation: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/nutrition", get(list_logs).post(create_log))
        .route("/nutrition/{id}", delete(delete_log))
}

/// A user's logs, latest time first
pub(crate) async fn logs_for(
    state: &AppState,
    user_id: i32,
) -> Result<Vec<nutrition_logs::Model>, AppError> {
    let logs = NutritionLog::find()
        .filter(nutrition_logs::Column::UserId.eq(user_id))
        .order_by_desc(nutrition_logs::Column::Time)
        .all(&state.db)
        .await?;
    Ok(logs)
}

/// List the caller's nutrition logs
#[utoipa::path(
    get,
    path = "/api/nutrition",
    tag = "Nutrition",
    responses(
        (status = 200, description = "Caller's logs ordered by time, latest first", body = Vec<nutrition_logs::Model>),
        (status = 401, description = "Missing or unknown token")
    )
)]
pub async fn list_logs(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<nutrition_logs::Model>>, AppError> {
    Ok(Json(logs_for(&state, user.id).await?))
}

/// Record a meal
#[utoipa::path(
    post,
    path = "/api/nutrition",
    tag = "Nutrition",
    request_body = CreateNutritionLog,
    responses(
        (status = 200, description = "Log stored", body = SuccessResponse),
        (status = 400, description = "Missing meal")
    )
)]
#[tracing::instrument(skip(state, user, request), fields(user_id = user.id))]
pub async fn create_log(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateNutritionLog>,
) -> Result<Json<SuccessResponse>, AppError> {
    require("meal", &request.meal)?;

    let log = nutrition_logs::ActiveModel {
        user_id: Set(user.id),
        meal: Set(request.meal),
        time: Set(request.time),
        description: Set(request.description),
        calories: Set(request.calories),
        observation: Set(request.observation.filter(|o| !o.trim().is_empty())),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(log_id = log.id, "Stored nutrition log");
    Ok(Json(SuccessResponse::created(log.id)))
}

/// Delete one of the caller's logs. Someone else's log is left untouched.
#[utoipa::path(
    delete,
    path = "/api/nutrition/{id}",
    tag = "Nutrition",
    params(("id" = i32, Path, description = "Log id")),
    responses((status = 200, description = "Deleted (or nothing to delete)", body = SuccessResponse))
)]
#[tracing::instrument(skip(state, user), fields(user_id = user.id))]
pub async fn delete_log(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>, AppError> {
    let result = NutritionLog::delete_many()
        .filter(nutrition_logs::Column::Id.eq(id))
        .filter(nutrition_logs::Column::UserId.eq(user.id))
        .exec(&state.db)
        .await?;

    info!(rows = result.rows_affected, "Deleted nutrition log {}", id);
    Ok(Json(SuccessResponse::ok()))
}
