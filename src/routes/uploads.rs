use std::path::Path;

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use super::JsonBody;
use crate::auth::AdminUser;
use crate::data_url;
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_KIND: &str = "file";
const DEFAULT_EXTENSION: &str = "bin";

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadRequest {
    /// Base64 payload, optionally as a `data:` URL
    pub data: String,
    /// Original file name; only its extension is kept
    #[serde(default)]
    pub filename: String,
    /// Prefix for the stored file name (catalog, promo, media...)
    #[serde(default = "default_kind")]
    pub kind: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Public URL the file is served from
    pub url: String,
    /// Location on disk
    pub path: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/upload", post(upload))
}

/// `<kind>_<millis>.<ext>` with both parts reduced to ASCII alphanumerics.
pub fn stored_file_name(kind: &str, filename: &str, millis: i64) -> String {
    let kind: String = kind.chars().filter(char::is_ascii_alphanumeric).collect();
    let kind = if kind.is_empty() { DEFAULT_KIND.to_string() } else { kind };

    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ext.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    format!("{}_{}.{}", kind, millis, extension)
}

/// Store a base64 upload under the upload directory
#[utoipa::path(
    post,
    path = "/api/admin/upload",
    tag = "Admin",
    request_body = UploadRequest,
    responses(
        (status = 200, description = "File stored", body = UploadResponse),
        (status = 400, description = "Payload is not valid base64"),
        (status = 413, description = "Payload exceeds the body limit")
    )
)]
#[tracing::instrument(skip(state, _admin, request), fields(kind = %request.kind, filename = %request.filename))]
pub async fn upload(
    _admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UploadRequest>,
) -> Result<Json<UploadResponse>, AppError> {
    let bytes = data_url::decode(&request.data)?;

    let name = stored_file_name(&request.kind, &request.filename, Utc::now().timestamp_millis());
    let upload_dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(upload_dir).await?;

    let path = upload_dir.join(&name);
    tokio::fs::write(&path, &bytes).await?;

    info!(bytes = bytes.len(), "Stored upload {}", path.display());
    Ok(Json(UploadResponse {
        url: format!("/uploads/{}", name),
        path: path.display().to_string(),
    }))
}
