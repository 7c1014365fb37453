// src/common/id_generator.rs
//! Identifier and session token generation
//!
//! Every row id and session token is a random (v4) UUID rendered in its
//! hyphenated lowercase form. Path parameters are checked with
//! [`parse_entity_id`] before they reach the database.

use uuid::Uuid;

use super::ApiError;

/// Generate a new user ID
pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a new meal or diet entry ID
pub fn generate_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a fresh, unguessable session token (122 random bits)
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}

/// Validate an id taken from a request path.
///
/// Returns the canonical hyphenated form so lookups match stored ids even
/// when the client sent uppercase or braced variants.
pub fn parse_entity_id(raw: &str) -> Result<String, ApiError> {
    Uuid::parse_str(raw.trim())
        .map(|id| id.to_string())
        .map_err(|_| ApiError::ValidationError("id: Invalid uuid".to_string()))
}
