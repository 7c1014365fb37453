//! User routes

use axum::{routing::post, Router};

use super::handlers;

/// # Routes
/// - `POST /users` - Sign up and receive a session cookie
/// - `GET /users` - Current user
pub fn auth_routes() -> Router {
    Router::new().route(
        "/users",
        post(handlers::signup_handler).get(handlers::me_handler),
    )
}
