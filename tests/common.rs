use product_api::{
    api::router::create_router,
    config::Config,
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_product_repo::SqliteProductRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    infra::seed::seed_if_empty,
    state::AppState,
};

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret-key-not-for-production";
pub const TEST_JWT_ISSUER: &str = "test-issuer";
pub const TEST_JWT_AUDIENCE: &str = "test-audience";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: TEST_JWT_SECRET.to_string(),
            jwt_issuer: TEST_JWT_ISSUER.to_string(),
            jwt_audience: TEST_JWT_AUDIENCE.to_string(),
            token_expiration_hours: 1,
        };

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(user_repo.clone(), config.clone()));

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo,
            product_repo: Arc::new(SqliteProductRepo::new(pool.clone())),
            auth_service,
        });

        seed_if_empty(&state).await.expect("Failed to seed test db");

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Logs in through the real endpoint and returns (token, role).
    pub async fn login(&self, username: &str, password: &str) -> (String, String) {
        let payload = serde_json::json!({
            "username": username,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let body = parse_body(response).await;
        let token = body["token"].as_str().expect("No token in body").to_string();
        let role = body["role"].as_str().expect("No role in body").to_string();
        (token, role)
    }

    pub async fn get(&self, uri: &str, token: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, token: &str, payload: &Value) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn put_json(&self, uri: &str, token: &str, payload: &Value) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
