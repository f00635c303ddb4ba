use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::{nutrition::logs_for, require, JsonBody};
use crate::ai::prompts::{self, HashtagBrief, NutritionBrief, TrainingBrief};
use crate::ai::{GenerationRequest, InlineImage};
use crate::auth::CurrentUser;
use crate::data_url;
use crate::entities::nutrition_logs;
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

#[derive(Debug, Serialize, ToSchema)]
pub struct GeneratedText {
    pub text: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRequest {
    /// Base64 image, optionally as a `data:` URL
    pub image: String,
    /// Overrides the MIME type carried by the data URL
    pub mime_type: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ai/hashtags", post(hashtags))
        .route("/ai/caption", post(caption))
        .route("/ai/training-plan", post(training_plan))
        .route("/ai/nutrition-strategy", post(nutrition_strategy))
}

async fn generate(state: &AppState, request: GenerationRequest) -> Result<Json<GeneratedText>, AppError> {
    let text = state.generator.generate(request).await?;
    info!(chars = text.len(), "Generated text");
    Ok(Json(GeneratedText { text }))
}

/// Generate 30 hashtags for a running post
#[utoipa::path(
    post,
    path = "/api/ai/hashtags",
    tag = "AI",
    request_body = HashtagBrief,
    responses(
        (status = 200, description = "Hashtags grouped by reach", body = GeneratedText),
        (status = 500, description = "Generation failed")
    )
)]
#[tracing::instrument(skip(state, brief))]
pub async fn hashtags(
    State(state): State<AppState>,
    JsonBody(brief): JsonBody<HashtagBrief>,
) -> Result<Json<GeneratedText>, AppError> {
    generate(&state, GenerationRequest::text(prompts::hashtags_prompt(&brief))).await
}

/// Write captions for a running photo
#[utoipa::path(
    post,
    path = "/api/ai/caption",
    tag = "AI",
    request_body = CaptionRequest,
    responses(
        (status = 200, description = "Captions for Instagram, TikTok and Strava", body = GeneratedText),
        (status = 400, description = "Missing image"),
        (status = 500, description = "Generation failed")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn caption(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CaptionRequest>,
) -> Result<Json<GeneratedText>, AppError> {
    let (embedded_mime, payload) = data_url::split_data_url(&request.image);
    require("image", payload)?;
    let mime_type = request
        .mime_type
        .as_deref()
        .or(embedded_mime)
        .unwrap_or(DEFAULT_IMAGE_MIME)
        .to_string();

    let image = InlineImage {
        mime_type,
        data: payload.to_string(),
    };
    generate(&state, GenerationRequest::with_image(prompts::caption_prompt(), image)).await
}

/// Build a weekly training plan
#[utoipa::path(
    post,
    path = "/api/ai/training-plan",
    tag = "AI",
    request_body = TrainingBrief,
    responses(
        (status = 200, description = "Training plan", body = GeneratedText),
        (status = 500, description = "Generation failed")
    )
)]
#[tracing::instrument(skip(state, brief))]
pub async fn training_plan(
    State(state): State<AppState>,
    JsonBody(brief): JsonBody<TrainingBrief>,
) -> Result<Json<GeneratedText>, AppError> {
    if brief.days == 0 || brief.days > 7 {
        return Err(AppError::InvalidRequest("days must be between 1 and 7".to_string()));
    }
    generate(&state, GenerationRequest::text(prompts::training_plan_prompt(&brief))).await
}

/// Nutrition strategy sized to the caller's plan
#[utoipa::path(
    post,
    path = "/api/ai/nutrition-strategy",
    tag = "AI",
    request_body = NutritionBrief,
    responses(
        (status = 200, description = "Nutrition strategy", body = GeneratedText),
        (status = 401, description = "Missing or unknown token"),
        (status = 500, description = "Generation failed")
    )
)]
#[tracing::instrument(skip(state, user, brief), fields(user_id = user.id, plan = ?user.plan))]
pub async fn nutrition_strategy(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    JsonBody(brief): JsonBody<NutritionBrief>,
) -> Result<Json<GeneratedText>, AppError> {
    let current_nutrition = match brief.current_nutrition.as_deref() {
        Some(text) => text.to_string(),
        None => summarize_logs(&logs_for(&state, user.id).await?),
    };

    let prompt = prompts::nutrition_strategy_prompt(&brief, &current_nutrition, user.plan);
    generate(&state, GenerationRequest::text(prompt)).await
}

/// One `- meal (time): description` line per log.
fn summarize_logs(logs: &[nutrition_logs::Model]) -> String {
    logs.iter()
        .map(|log| format!("- {} ({}): {}", log.meal, log.time, log.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_one_line_per_log() {
        let logs = vec![
            nutrition_logs::Model {
                id: 1,
                user_id: 1,
                meal: "Almoço".to_string(),
                time: "12:30".to_string(),
                description: "arroz, feijão e frango".to_string(),
                calories: Some(650),
                observation: None,
            },
            nutrition_logs::Model {
                id: 2,
                user_id: 1,
                meal: "Café da Manhã".to_string(),
                time: "07:00".to_string(),
                description: "pão e ovos".to_string(),
                calories: None,
                observation: None,
            },
        ];
        assert_eq!(
            summarize_logs(&logs),
            "- Almoço (12:30): arroz, feijão e frango\n- Café da Manhã (07:00): pão e ovos"
        );
        assert_eq!(summarize_logs(&[]), "");
    }
}
