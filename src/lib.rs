pub mod ai;
pub mod auth;
pub mod config;
pub mod data_url;
pub mod db;
pub mod entities;
pub mod error;
pub mod rate_limit;
pub mod routes;
pub mod scraper;
pub mod state;

use axum::{
    extract::{DefaultBodyLimit, OriginalUri},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi, ToSchema,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_token",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RunnerPro AI API",
        version = "0.1.0",
        description = "Content, commerce and AI tools for runners"
    ),
    modifiers(&BearerAuth),
    paths(
        health_check,
        routes::users::me,
        routes::users::list_users,
        routes::users::create_user,
        routes::users::update_plan,
        routes::users::update_role,
        routes::nutrition::list_logs,
        routes::nutrition::create_log,
        routes::nutrition::delete_log,
        routes::professionals::list_active,
        routes::professionals::list_all,
        routes::professionals::create_professional,
        routes::professionals::delete_professional,
        routes::catalog::list_catalog,
        routes::catalog::list_all,
        routes::catalog::create_item,
        routes::catalog::delete_item,
        routes::raffles::list_raffles,
        routes::raffles::create_raffle,
        routes::raffles::update_sold,
        routes::raffles::delete_raffle,
        routes::promotions::list_active,
        routes::promotions::list_all,
        routes::promotions::create_promotion,
        routes::promotions::delete_promotion,
        routes::promotions::fetch_metadata,
        routes::media::list_published,
        routes::media::submit_media,
        routes::media::list_all,
        routes::media::approve_media,
        routes::media::delete_media,
        routes::uploads::upload,
        routes::ai::hashtags,
        routes::ai::caption,
        routes::ai::training_plan,
        routes::ai::nutrition_strategy
    ),
    components(schemas(
        HealthResponse,
        routes::SuccessResponse,
        entities::users::Model,
        entities::nutrition_logs::Model,
        entities::professionals::Model,
        entities::catalog::Model,
        entities::raffles::Model,
        entities::promotions::Model,
        entities::media::Model,
        entities::Plan,
        entities::Role,
        entities::ItemStatus,
        entities::MediaKind,
        entities::MediaCategory,
        entities::MediaStatus,
        routes::users::MeResponse,
        routes::users::CreateUserRequest,
        routes::users::UpdatePlanRequest,
        routes::users::UpdateRoleRequest,
        routes::nutrition::CreateNutritionLog,
        routes::professionals::CreateProfessional,
        routes::catalog::CatalogEntry,
        routes::catalog::CreateCatalogItem,
        routes::raffles::CreateRaffle,
        routes::raffles::UpdateSold,
        routes::promotions::CreatePromotion,
        routes::promotions::FetchMetadataRequest,
        scraper::PageMetadata,
        routes::media::SubmitMedia,
        routes::uploads::UploadRequest,
        routes::uploads::UploadResponse,
        routes::ai::GeneratedText,
        routes::ai::CaptionRequest,
        ai::prompts::HashtagBrief,
        ai::prompts::TrainingBrief,
        ai::prompts::NutritionBrief
    ))
)]
pub struct ApiDoc;

/// Create the application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();

    // JSON bodies are capped by the layer below (413), not by axum's default extractor limit.
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .merge(routes::users::router())
        .merge(routes::nutrition::router())
        .merge(routes::professionals::router())
        .merge(routes::catalog::router())
        .merge(routes::raffles::router())
        .merge(routes::promotions::router())
        .merge(routes::media::router())
        .merge(routes::uploads::router())
        .merge(routes::ai::router())
        .fallback(api_not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes()));

    let docs_router = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // `fallback` keeps the shell's 200; `not_found_service` would turn it into a 404.
    let spa = ServeDir::new(&config.public_dir)
        .fallback(ServeFile::new(config.public_dir.join("index.html")));

    Router::new()
        .nest("/api", api_routes)
        .merge(docs_router)
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
