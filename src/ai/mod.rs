//! Generative-AI proxy: prompt templates plus the client that forwards them.

mod gemini;
pub mod prompts;

use async_trait::async_trait;

use crate::error::AppError;

pub use gemini::GeminiClient;

/// Image sent alongside a prompt, base64 encoded without any data-URL prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub image: Option<InlineImage>,
}

impl GenerationRequest {
    pub fn text(prompt: String) -> Self {
        Self { prompt, image: None }
    }

    pub fn with_image(prompt: String, image: InlineImage) -> Self {
        Self {
            prompt,
            image: Some(image),
        }
    }
}

/// A text generation backend. Returns the model's raw text output.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String, AppError>;
}
