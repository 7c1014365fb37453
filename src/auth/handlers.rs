//! User handlers

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use super::extractors::SessionUser;
use super::models::CreateUserRequest;
use super::services::UsersService;
use crate::common::config::SessionConfig;
use crate::common::{AppState, ApiError, JsonBody};

/// POST /users
/// Signs a user up and sets the session cookie
///
/// # Request Body
/// ```json
/// {
///   "name": "Jane Doe",
///   "nickname": "jane",
///   "email": "jane@example.com",
///   "birth": "1990-05-17"
/// }
/// ```
///
/// Responds `201` with an empty body and a `Set-Cookie` header.
pub async fn signup_handler(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, CookieJar), ApiError> {
    let signup = UsersService::new(state.db.clone()).signup(&request).await?;

    let jar = jar.add(session_cookie(state.session(), signup.session_token));

    info!(user_id = %signup.user_id, "Session cookie issued");

    Ok((StatusCode::CREATED, jar))
}

/// GET /users
/// Returns the user owning the session
pub async fn me_handler(
    Extension(state): Extension<Arc<AppState>>,
    session: SessionUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user = UsersService::new(state.db.clone())
        .get_user(&session.id)
        .await?;

    Ok(Json(json!({ "user": user })))
}

fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .max_age(time::Duration::days(config.max_age_days))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .build()
}
