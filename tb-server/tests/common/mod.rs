#![allow(dead_code)]

//! Test infrastructure for tb-server API tests

use tb_server::AppState;
use tb_server::services::{self, files::FileStore};

use tb_auth::{JwtValidator, TokenIssuer};
use tb_config::StorageConfig;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";

/// Create a test pool with in-memory SQLite, configured like the real
/// connection: foreign keys on, and a single connection so every query
/// sees the same in-memory database
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    tb_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing. The TempDir backs the file store and must
/// outlive the state.
pub async fn create_test_state() -> (AppState, TempDir) {
    let pool = create_test_pool().await;

    let issuer =
        TokenIssuer::new(TEST_SECRET, 60, None, None).expect("Failed to create token issuer");
    let validator = JwtValidator::with_hs256(TEST_SECRET, None, None);

    let storage_dir = TempDir::new().expect("Failed to create storage dir");
    let files = FileStore::new(storage_dir.path().to_path_buf(), &StorageConfig::default());

    let state = AppState {
        pool,
        issuer: Arc::new(issuer),
        validator: Arc::new(validator),
        files: Arc::new(files),
        environment: "test".to_string(),
    };

    (state, storage_dir)
}

/// Build the app router with default (allow-any) CORS
pub fn test_router(state: AppState) -> axum::Router {
    tb_server::build_router(state, &tb_config::CorsConfig::default())
}

/// Register a user through the service layer and mint a token for them
pub async fn create_test_user(state: &AppState, username: &str, email: &str) -> (Uuid, String) {
    let new_user = services::auth::NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
        first_name: String::new(),
        last_name: String::new(),
    };

    let user = services::auth::register(&state.pool, new_user)
        .await
        .expect("Failed to register test user")
        .expect("Registration rejected");

    let token = state
        .issuer
        .generate_token(&user)
        .expect("Failed to mint test token");

    (user.id, token)
}

/// Build a JSON request with an optional bearer token
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Build a bodyless request with an optional bearer token
pub fn bare_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Collect a response body into JSON
pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).expect("Response body was not JSON")
}
