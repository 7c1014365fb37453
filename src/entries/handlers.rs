// src/entries/handlers.rs
//
// One handler set serves both /meals and /diets; the router layers the
// `EntryKind` in as an extension.

use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use super::models::{CreateEntryRequest, EntryKind, UpdateEntryRequest};
use super::services::EntriesService;
use crate::auth::SessionUser;
use crate::common::{parse_entity_id, ApiError, AppState, JsonBody};

fn service(state: &AppState, kind: EntryKind) -> EntriesService {
    EntriesService::new(state.db.clone(), kind)
}

/// POST /{kind} - Create an entry owned by the session user; 201, empty body
pub async fn create_entry(
    Extension(state): Extension<Arc<AppState>>,
    Extension(kind): Extension<EntryKind>,
    session: SessionUser,
    JsonBody(request): JsonBody<CreateEntryRequest>,
) -> Result<StatusCode, ApiError> {
    info!(user_id = %session.id, kind = %kind, name = %request.name, "Creating entry");

    service(&state, kind).create(&session.id, &request).await?;

    Ok(StatusCode::CREATED)
}

/// GET /{kind} - All entries of the session user
pub async fn list_entries(
    Extension(state): Extension<Arc<AppState>>,
    Extension(kind): Extension<EntryKind>,
    session: SessionUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let entries = service(&state, kind).list(&session.id).await?;

    Ok(Json(json!({ kind.table(): entries })))
}

/// GET /{kind}/:id
pub async fn get_entry(
    Extension(state): Extension<Arc<AppState>>,
    Extension(kind): Extension<EntryKind>,
    session: SessionUser,
    Path(raw_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let entry_id = parse_id(&raw_id)?;
    let entry = service(&state, kind).get(&session.id, &entry_id).await?;

    Ok(Json(json!({ kind.singular(): entry })))
}

/// PUT /{kind}/:id - Partial update, returns the merged entry
pub async fn update_entry(
    Extension(state): Extension<Arc<AppState>>,
    Extension(kind): Extension<EntryKind>,
    session: SessionUser,
    Path(raw_id): Path<String>,
    JsonBody(request): JsonBody<UpdateEntryRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let entry_id = parse_id(&raw_id)?;
    let entry = service(&state, kind)
        .update(&session.id, &entry_id, &request)
        .await?;

    Ok(Json(json!({ kind.singular(): entry })))
}

/// DELETE /{kind}/:id - 204, empty body
pub async fn delete_entry(
    Extension(state): Extension<Arc<AppState>>,
    Extension(kind): Extension<EntryKind>,
    session: SessionUser,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let entry_id = parse_id(&raw_id)?;
    service(&state, kind).delete(&session.id, &entry_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /{kind}/metrics - Totals and best in-diet streak
pub async fn entry_metrics(
    Extension(state): Extension<Arc<AppState>>,
    Extension(kind): Extension<EntryKind>,
    session: SessionUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let metrics = service(&state, kind).metrics(&session.id).await?;

    Ok(Json(json!({ "metrics": metrics })))
}

fn parse_id(raw_id: &str) -> Result<String, ApiError> {
    parse_entity_id(raw_id).map_err(|e| {
        warn!(raw_id = %raw_id, "Rejected non-uuid entry id");
        e
    })
}
