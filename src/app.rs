// src/app.rs
//! Router composition and middleware stack

use axum::{
    extract::Extension,
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::common::{ApiError, AppState};
use crate::{auth, entries, logging_middleware};

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        // ====================================================================
        // USERS AND SESSIONS
        // ====================================================================
        .merge(auth::auth_routes())
        // ====================================================================
        // MEALS AND DIETS
        // ====================================================================
        .merge(entries::meals_routes())
        .merge(entries::diets_routes())
        .route("/health", get(health_handler))
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// GET /health - One round-trip to the store
async fn health_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    sqlx::query("SELECT 1")
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Health check failed");
            ApiError::DatabaseError(e)
        })?;

    Ok(Json(json!({ "status": "ok" })))
}
