// Shared fixtures for database-backed tests

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

use super::config::{AppConfig, SessionConfig};
use super::{generate_session_token, generate_user_id, migrations, AppState};

/// In-memory database with the full schema.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    migrations::run_migrations(&pool, false).await.unwrap();

    pool
}

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        session: SessionConfig::default(),
        reset_db: false,
    }
}

pub async fn setup_test_state() -> AppState {
    AppState::new(setup_test_db().await, test_config())
}

/// Insert a user directly, returning `(user_id, session_token)`.
pub async fn insert_test_user(pool: &SqlitePool, nickname: &str) -> (String, String) {
    let user_id = generate_user_id();
    let token = generate_session_token();

    sqlx::query(
        "INSERT INTO users (id, name, nickname, email, birth, session_id) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&user_id)
    .bind(format!("Test {nickname}"))
    .bind(nickname)
    .bind(format!("{nickname}@example.com"))
    .bind("1990-05-17T00:00:00.000Z")
    .bind(&token)
    .execute(pool)
    .await
    .unwrap();

    (user_id, token)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Drive the full router with one request, optionally carrying a session cookie.
pub async fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    session: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let router = crate::app::build_router(Arc::new(state.clone()));

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = session {
        builder = builder.header(
            header::COOKIE,
            format!("{}={}", state.session().cookie_name, token),
        );
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
