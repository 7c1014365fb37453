//! Session resolution and user signup

use sqlx::SqlitePool;
use tracing::{debug, error, info, warn};

use super::models::{CreateUserRequest, Signup, User, UserRow};
use super::validators::SignupValidator;
use crate::common::helpers::{format_timestamp, now_timestamp};
use crate::common::validation::parse_timestamp;
use crate::common::{
    generate_session_token, generate_user_id, safe_email_log, safe_token_log, ApiError, Validator,
};

/// Maps an opaque session token to the owning user's id.
///
/// Knows nothing about cookies; callers hand over whatever token the
/// transport carried.
#[derive(Clone)]
pub struct SessionResolver {
    db: SqlitePool,
}

impl SessionResolver {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Absent or blank tokens are `Unauthenticated`; tokens that match no
    /// user are `NotFound`.
    pub async fn resolve(&self, token: Option<&str>) -> Result<String, ApiError> {
        let token = match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => t,
            None => {
                warn!("Session resolution failed: no session token");
                return Err(ApiError::Unauthenticated("No sessionId provided!".to_string()));
            }
        };

        let user_id = sqlx::query_scalar::<_, String>("SELECT id FROM users WHERE session_id = ?")
            .bind(token)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    token = %safe_token_log(token),
                    "Database error during session lookup"
                );
                ApiError::DatabaseError(e)
            })?;

        match user_id {
            Some(id) => {
                debug!(user_id = %id, "Session resolved");
                Ok(id)
            }
            None => {
                warn!(token = %safe_token_log(token), "Session token matches no user");
                Err(ApiError::NotFound("User not found!".to_string()))
            }
        }
    }
}

pub struct UsersService {
    db: SqlitePool,
}

impl UsersService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Create a user and bind a freshly generated session token to it.
    pub async fn signup(&self, request: &CreateUserRequest) -> Result<Signup, ApiError> {
        SignupValidator.validate(request).into_result()?;

        let birth = parse_timestamp(&request.birth)
            .ok_or_else(|| ApiError::ValidationError("birth: Invalid date".to_string()))?;

        let user_id = generate_user_id();
        let session_token = generate_session_token();

        sqlx::query(
            r#"
            INSERT INTO users (id, name, nickname, email, birth, created_at, session_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user_id)
        .bind(&request.name)
        .bind(&request.nickname)
        .bind(&request.email)
        .bind(format_timestamp(&birth))
        .bind(now_timestamp())
        .bind(&session_token)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                email = %safe_email_log(&request.email),
                "Database error creating user"
            );
            ApiError::DatabaseError(e)
        })?;

        info!(
            user_id = %user_id,
            email = %safe_email_log(&request.email),
            "User signed up"
        );

        Ok(Signup {
            user_id,
            session_token,
        })
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, nickname, email, birth, created_at FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %user_id, "Database error fetching user");
            ApiError::DatabaseError(e)
        })?
        .ok_or_else(|| {
            warn!(user_id = %user_id, "Session user has no row");
            ApiError::NotFound("User not found!".to_string())
        })?;

        User::try_from(row)
    }
}
