// src/logging_middleware.rs
//! Per-request access log, with JSON bodies at debug level

use axum::body::{to_bytes, HttpBody};
use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, enabled, info, Level};

/// Request bodies larger than this, or of unknown length, pass through unlogged.
const MAX_LOGGED_BODY: usize = 64 * 1024;

pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let request = if enabled!(Level::DEBUG) && fits_log_limit(request.body()) {
        let (parts, body) = request.into_parts();
        let bytes = to_bytes(body, MAX_LOGGED_BODY)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;
        if let Some(body) = printable(&bytes) {
            debug!(method = %method, path = %path, request_body = %body, "📥 Request");
        }
        Request::from_parts(parts, Body::from(bytes))
    } else {
        debug!(method = %method, path = %path, "📥 Request (body not logged)");
        request
    };

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Request completed"
    );

    if !enabled!(Level::DEBUG) {
        return Ok(response);
    }

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    if let Some(body) = printable(&bytes) {
        debug!(status = %parts.status, response_body = %body, "📤 Response");
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

fn fits_log_limit(body: &Body) -> bool {
    body.size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_LOGGED_BODY as u64)
}

/// Compact JSON, or the raw text when the body is not JSON.
fn printable(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let text = std::str::from_utf8(bytes).ok()?;
    Some(
        serde_json::from_str::<serde_json::Value>(text)
            .map(|json| json.to_string())
            .unwrap_or_else(|_| text.to_string()),
    )
}
