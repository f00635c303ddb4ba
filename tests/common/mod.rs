#![allow(dead_code)]

use std::sync::{Arc, Once};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mockall::mock;
use runnerpro::ai::{GenerationRequest, TextGenerator};
use runnerpro::config::Config;
use runnerpro::error::AppError;
use runnerpro::state::AppState;
use runnerpro::{create_app, db};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

static INIT: Once = Once::new();

pub fn setup() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

mock! {
    pub Generator {}

    #[async_trait]
    impl TextGenerator for Generator {
        async fn generate(&self, request: GenerationRequest) -> Result<String, AppError>;
    }
}

/// An app wired to a throwaway SQLite file. The directory lives as long as the struct.
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_generator(MockGenerator::new()).await
    }

    pub async fn with_generator(generator: MockGenerator) -> Self {
        Self::build(generator, |_| {}).await
    }

    pub async fn with_config(configure: impl FnOnce(&mut Config)) -> Self {
        Self::build(MockGenerator::new(), configure).await
    }

    async fn build(generator: MockGenerator, configure: impl FnOnce(&mut Config)) -> Self {
        setup();
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config {
            database_url: format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display()),
            upload_dir: dir.path().join("uploads"),
            public_dir: dir.path().join("dist"),
            body_limit_mb: 1,
            ..Config::default()
        };
        configure(&mut config);

        let db = db::connect(&config.database_url).await.unwrap();
        let state = AppState::new(db, reqwest::Client::new(), Arc::new(generator), config);
        let app = create_app(state.clone());

        Self { app, state, dir }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, None).await
    }

    /// Bootstrap a guest through `/api/user/me` and return the profile.
    pub async fn bootstrap(&self) -> Value {
        let (status, profile) = self.get("/api/user/me", None).await;
        assert_eq!(status, StatusCode::OK);
        profile
    }

    /// Must be the first bootstrap in a test: the first account is the admin.
    pub async fn admin_token(&self) -> String {
        let profile = self.bootstrap().await;
        assert_eq!(profile["role"], "admin");
        token_of(&profile)
    }

    pub async fn user_token(&self) -> String {
        let profile = self.bootstrap().await;
        assert_eq!(profile["role"], "user");
        token_of(&profile)
    }

    /// Admin creates a user on `plan`, then returns that user's token from the database.
    pub async fn token_for_plan(&self, admin: &str, email: &str, plan: &str) -> String {
        use runnerpro::entities::{users, User};
        use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

        let (status, _) = self
            .post(
                "/api/admin/users",
                Some(admin),
                serde_json::json!({ "name": "Atleta", "email": email, "plan": plan }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        User::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.state.db)
            .await
            .unwrap()
            .unwrap()
            .session_token
    }
}

pub fn token_of(profile: &Value) -> String {
    profile["session_token"].as_str().unwrap().to_string()
}
