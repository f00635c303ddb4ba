use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{GenerationRequest, TextGenerator};
use crate::config::Config;
use crate::error::AppError;

/// Gemini `generateContent` request body
#[derive(Serialize, Debug)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize, Deserialize, Debug)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// A part is either text or an inline blob.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    inline_data: Option<GeminiBlob>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GeminiBlob {
    mime_type: String,
    data: String,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize, Debug)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

/// Client for Google's Generative Language REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            api_key,
            timeout,
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(
            client,
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
            config.gemini_api_key.clone(),
            config.ai_timeout(),
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

fn build_body(request: GenerationRequest) -> GeminiRequest {
    let mut parts = Vec::with_capacity(2);
    // Image first, then the instructions about it.
    if let Some(image) = request.image {
        parts.push(GeminiPart {
            text: None,
            inline_data: Some(GeminiBlob {
                mime_type: image.mime_type,
                data: image.data,
            }),
        });
    }
    parts.push(GeminiPart {
        text: Some(request.prompt),
        inline_data: None,
    });

    GeminiRequest {
        contents: vec![GeminiContent { parts }],
    }
}

fn extract_text(response: GeminiResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect::<Vec<_>>()
        .join("");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[tracing::instrument(skip(self, request), fields(model = %self.model, has_image = request.image.is_some()))]
    async fn generate(&self, request: GenerationRequest) -> Result<String, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::InternalError("GEMINI_API_KEY is not configured".to_string()))?;

        let body = build_body(request);

        info!("Sending request to Gemini API...");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Network error calling Gemini API: {}", e);
                AppError::UpstreamError(format!("Failed to call Gemini API: {}", e))
            })?;

        let status = response.status();
        info!("Received response from Gemini API with status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!("Gemini API Error - Status: {}, Body: {}", status, error_text);
            return Err(AppError::UpstreamError(format!(
                "Gemini API returned error status: {}",
                status
            )));
        }

        let api_response = response.json::<GeminiResponse>().await.map_err(|e| {
            error!("Failed to parse Gemini API JSON response: {}", e);
            AppError::UpstreamError(format!("Failed to parse Gemini API response: {}", e))
        })?;

        extract_text(api_response)
            .ok_or_else(|| AppError::UpstreamError("Gemini API returned no text".to_string()))
    }
}
