// Request body extractor with API-shaped rejections

use axum::extract::FromRequest;

use super::ApiError;

/// `axum::Json` whose rejection is an [`ApiError::ValidationError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
