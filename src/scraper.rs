//! Open Graph / meta tag extraction used to pre-fill promotion forms.

use reqwest::Client;
use select::document::Document;
use select::predicate::{Attr, Name};
use serde::Serialize;
use tracing::{info, warn};
use url::Url;
use utoipa::ToSchema;

use crate::error::AppError;

/// Best-effort page metadata. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Absolute image URL
    pub image: String,
}

/// Fetch `url` and extract title, description and image from its meta tags.
#[tracing::instrument(skip(client))]
pub async fn fetch_page_metadata(client: &Client, url: &str) -> Result<PageMetadata, AppError> {
    let page_url = Url::parse(url)
        .map_err(|e| AppError::InvalidRequest(format!("invalid url {}: {}", url, e)))?;

    if !matches!(page_url.scheme(), "http" | "https") {
        return Err(AppError::InvalidRequest(format!(
            "unsupported url scheme: {}",
            page_url.scheme()
        )));
    }

    let response = client
        .get(page_url.clone())
        .send()
        .await
        .map_err(|e| AppError::UpstreamError(format!("Failed to fetch URL content: {}", e)))?;

    if !response.status().is_success() {
        // Pages behind bot walls often answer 4xx with usable markup; keep going.
        warn!("Metadata fetch for {} returned status {}", url, response.status());
    }

    let html = response
        .text()
        .await
        .map_err(|e| AppError::UpstreamError(format!("Failed to read response body: {}", e)))?;

    let metadata = extract_metadata(&html, &page_url);
    info!(
        "Extracted metadata for {} (title: {}, image: {})",
        url,
        !metadata.title.is_empty(),
        !metadata.image.is_empty()
    );
    Ok(metadata)
}

/// Pure extraction step; `base` resolves relative image URLs.
pub fn extract_metadata(html: &str, base: &Url) -> PageMetadata {
    let document = Document::from(html);

    let meta = |attr: &'static str, value: &'static str| -> Option<String> {
        document
            .find(Attr(attr, value))
            .filter_map(|node| node.attr("content"))
            .map(|content| content.trim().to_string())
            .find(|content| !content.is_empty())
    };

    let title = meta("property", "og:title")
        .or_else(|| meta("name", "twitter:title"))
        .or_else(|| {
            document
                .find(Name("title"))
                .next()
                .map(|node| node.text().trim().to_string())
        })
        .unwrap_or_default();

    let description = meta("property", "og:description")
        .or_else(|| meta("name", "description"))
        .or_else(|| meta("name", "twitter:description"))
        .unwrap_or_default();

    let image = meta("property", "og:image")
        .or_else(|| meta("name", "twitter:image"))
        .map(|image| match base.join(&image) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => image,
        })
        .unwrap_or_default();

    PageMetadata {
        title,
        description,
        image,
    }
}
