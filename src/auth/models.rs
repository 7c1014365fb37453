//! User and session data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::helpers::parse_stored_timestamp;
use crate::common::ApiError;

/// User database row (the session token column is never selected)
#[derive(FromRow, Debug, Clone)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub nickname: String,
    pub email: String,
    pub birth: String,
    pub created_at: String,
}

/// User as returned by the API, dates reified and session token withheld
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub nickname: String,
    pub email: String,
    pub birth: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = ApiError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            birth: parse_stored_timestamp("birth", &row.birth)?,
            created_at: parse_stored_timestamp("created_at", &row.created_at)?,
            id: row.id,
            name: row.name,
            nickname: row.nickname,
            email: row.email,
        })
    }
}

/// POST /users body
#[derive(Deserialize, Debug)]
pub struct CreateUserRequest {
    pub name: String,
    pub nickname: String,
    pub email: String,
    pub birth: String,
}

/// Result of a successful signup
#[derive(Debug)]
pub struct Signup {
    pub user_id: String,
    pub session_token: String,
}
