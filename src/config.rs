use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Runtime settings, read once at startup from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Directory uploaded files are written to and served from under `/uploads`.
    pub upload_dir: PathBuf,
    /// Built SPA assets. Unknown non-API paths fall back to `index.html` in here.
    pub public_dir: PathBuf,
    pub body_limit_mb: usize,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub ai_timeout_secs: u64,
    /// Tokenless `/api/user/me` calls allowed per window; each one creates an account.
    pub guest_bootstrap_limit: u32,
    pub guest_bootstrap_window_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "sqlite://runnerpro.db?mode=rwc".to_string(),
            upload_dir: PathBuf::from("uploads"),
            public_dir: PathBuf::from("dist"),
            body_limit_mb: 10,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            ai_timeout_secs: 60,
            guest_bootstrap_limit: 30,
            guest_bootstrap_window_secs: 3600,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Ok(Self {
            host: env::var("RUNNERPRO_HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            body_limit_mb: parse_var("BODY_LIMIT_MB", defaults.body_limit_mb)?,
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            ai_timeout_secs: parse_var("AI_TIMEOUT_SECS", defaults.ai_timeout_secs)?,
            guest_bootstrap_limit: parse_var("GUEST_BOOTSTRAP_LIMIT", defaults.guest_bootstrap_limit)?,
            guest_bootstrap_window_secs: parse_var(
                "GUEST_BOOTSTRAP_WINDOW_SECS",
                defaults.guest_bootstrap_window_secs,
            )?,
        })
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb * 1024 * 1024
    }

    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai_timeout_secs)
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} is invalid: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_limit_is_in_megabytes() {
        let config = Config {
            body_limit_mb: 2,
            ..Config::default()
        };
        assert_eq!(config.body_limit_bytes(), 2 * 1024 * 1024);
    }

    #[test]
    fn malformed_number_is_an_error() {
        env::set_var("RUNNERPRO_TEST_PORT", "not-a-port");
        let parsed: Result<u16> = parse_var("RUNNERPRO_TEST_PORT", 3000);
        assert!(parsed.is_err());
        env::remove_var("RUNNERPRO_TEST_PORT");
    }

    #[test]
    fn missing_var_uses_default() {
        let parsed: u64 = parse_var("RUNNERPRO_TEST_UNSET_TIMEOUT", 60).unwrap();
        assert_eq!(parsed, 60);
    }
}
