//! Session extractor for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;

use crate::auth::SessionResolver;
use crate::common::{ApiError, AppState};

/// The user owning the request's session cookie.
///
/// Every meal and diet query is filtered by this id; handlers never take an
/// owner from the request body.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state): Extension<Arc<AppState>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&app_state.session().cookie_name)
            .map(|cookie| cookie.value());

        let id = SessionResolver::new(app_state.db.clone())
            .resolve(token)
            .await?;

        Ok(SessionUser { id })
    }
}
