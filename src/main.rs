use std::sync::Arc;

use anyhow::Context;
use runnerpro::ai::GeminiClient;
use runnerpro::config::Config;
use runnerpro::state::AppState;
use runnerpro::{create_app, db};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading RUST_LOG
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; AI endpoints will fail");
    }

    let db = db::connect(&config.database_url)
        .await
        .context("failed to open database")?;

    let http_client = reqwest::Client::builder()
        .user_agent(concat!("runnerpro/", env!("CARGO_PKG_VERSION")))
        .timeout(config.ai_timeout())
        .build()
        .context("failed to build HTTP client")?;

    let generator = Arc::new(GeminiClient::from_config(http_client.clone(), &config));
    let addr = format!("{}:{}", config.host, config.port);
    let app = create_app(AppState::new(db, http_client, generator, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
