use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set, SqlErr};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{require, JsonBody, SuccessResponse};
use crate::auth::{bearer_token, find_by_token, AdminUser};
use crate::entities::{users, Plan, Role, User};
use crate::error::AppError;
use crate::rate_limit::check_guest_budget;
use crate::state::AppState;

const GUEST_NAME: &str = "Runner Guest";
const DEFAULT_PAYMENT_STATUS: &str = "Pendente";

/// The caller's own profile, including the session token to send back as a bearer credential.
#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    #[serde(flatten)]
    pub user: users::Model,
    pub session_token: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub plan: Plan,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePlanRequest {
    pub plan: Plan,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRoleRequest {
    pub role: Role,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/me", get(me))
        .route("/admin/users", get(list_users).post(create_user))
        .route("/admin/users/{id}/plan", post(update_plan))
        .route("/admin/users/{id}/role", post(update_role))
}

/// Fetch the caller's profile, creating a guest account when no token is sent
#[utoipa::path(
    get,
    path = "/api/user/me",
    tag = "Users",
    responses(
        (status = 200, description = "Profile of the caller (or of a freshly bootstrapped guest)", body = MeResponse),
        (status = 401, description = "Bearer token present but unknown"),
        (status = 429, description = "Guest bootstrap budget exhausted")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<MeResponse>, AppError> {
    if let Some(token) = bearer_token(&headers) {
        let user = find_by_token(&state.db, token)
            .await?
            .ok_or_else(|| AppError::Unauthorized("unknown session token".to_string()))?;
        let session_token = user.session_token.clone();
        return Ok(Json(MeResponse { user, session_token }));
    }

    let user = bootstrap_guest(&state).await?;
    let session_token = user.session_token.clone();
    Ok(Json(MeResponse { user, session_token }))
}

/// The very first account becomes the Elite admin; everyone after starts as a Starter user.
async fn bootstrap_guest(state: &AppState) -> Result<users::Model, AppError> {
    check_guest_budget(&state.guest_limiter)?;

    let is_first = User::find().count(&state.db).await? == 0;
    let (plan, role) = if is_first {
        (Plan::Elite, Role::Admin)
    } else {
        (Plan::Starter, Role::User)
    };

    let token = users::new_session_token();
    let guest = users::ActiveModel {
        name: Set(GUEST_NAME.to_string()),
        email: Set(guest_email()),
        plan: Set(plan),
        role: Set(role),
        payment_status: Set(DEFAULT_PAYMENT_STATUS.to_string()),
        session_token: Set(token),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!(user_id = guest.id, ?plan, ?role, "Bootstrapped guest account");
    Ok(guest)
}

/// Unrelated to the session token, which admins must never be able to read.
fn guest_email() -> String {
    format!("guest-{}@runnerpro.ai", &Uuid::new_v4().simple().to_string()[..12])
}

/// List every user
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    responses((status = 200, description = "All users", body = Vec<users::Model>))
)]
pub async fn list_users(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<users::Model>>, AppError> {
    let users = User::find()
        .order_by_asc(users::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(users))
}

/// Create a user account
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = "Admin",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = SuccessResponse),
        (status = 400, description = "Missing field or email already registered")
    )
)]
#[tracing::instrument(skip(state, _admin, request), fields(email = %request.email))]
pub async fn create_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    require("name", &request.name)?;
    require("email", &request.email)?;

    let created = users::ActiveModel {
        name: Set(request.name.trim().to_string()),
        email: Set(request.email.trim().to_lowercase()),
        plan: Set(request.plan),
        role: Set(request.role),
        payment_status: Set(DEFAULT_PAYMENT_STATUS.to_string()),
        session_token: Set(users::new_session_token()),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Email already registered".to_string())
        }
        _ => AppError::from(e),
    })?;

    info!(user_id = created.id, "Created user");
    Ok(Json(SuccessResponse::created(created.id)))
}

/// Change a user's subscription plan
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/plan",
    tag = "Admin",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdatePlanRequest,
    responses(
        (status = 200, description = "Plan updated", body = SuccessResponse),
        (status = 404, description = "No such user")
    )
)]
#[tracing::instrument(skip(state, _admin, request))]
pub async fn update_plan(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(request): JsonBody<UpdatePlanRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut user: users::ActiveModel = find_user(&state, id).await?.into();
    user.plan = Set(request.plan);
    user.update(&state.db).await?;

    info!(user_id = id, plan = ?request.plan, "Updated plan");
    Ok(Json(SuccessResponse::ok()))
}

/// Change a user's role
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/role",
    tag = "Admin",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = SuccessResponse),
        (status = 404, description = "No such user")
    )
)]
#[tracing::instrument(skip(state, _admin, request))]
pub async fn update_role(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(request): JsonBody<UpdateRoleRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut user: users::ActiveModel = find_user(&state, id).await?.into();
    user.role = Set(request.role);
    user.update(&state.db).await?;

    info!(user_id = id, role = ?request.role, "Updated role");
    Ok(Json(SuccessResponse::ok()))
}

async fn find_user(state: &AppState, id: i32) -> Result<users::Model, AppError> {
    User::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
}
