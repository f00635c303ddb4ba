use std::sync::Arc;

use reqwest::Client;
use sea_orm::DatabaseConnection;

use crate::ai::TextGenerator;
use crate::config::Config;
use crate::rate_limit::{create_guest_limiter, GuestLimiter};

/// Everything a handler may touch. Built once in `main` (or a test) and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Shared client for outbound page fetches.
    pub http_client: Client,
    pub generator: Arc<dyn TextGenerator>,
    pub config: Arc<Config>,
    pub guest_limiter: GuestLimiter,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: Client,
        generator: Arc<dyn TextGenerator>,
        config: Config,
    ) -> Self {
        let guest_limiter =
            create_guest_limiter(config.guest_bootstrap_limit, config.guest_bootstrap_window_secs);
        Self {
            db,
            http_client,
            generator,
            config: Arc::new(config),
            guest_limiter,
        }
    }
}
