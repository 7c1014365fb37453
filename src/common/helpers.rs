// Helper functions for safe logging and timestamp storage

use chrono::{DateTime, SecondsFormat, Utc};

use super::validation::parse_timestamp;
use super::ApiError;

/// Masks email addresses for safe logging
///
/// # Example
/// ```ignore
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***@***.***".to_string(),
    }
}

/// Masks session tokens for safe logging, keeping the first and last 4 characters
pub fn safe_token_log(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}

/// Storage format for every timestamp column.
///
/// Fixed-width UTC with millisecond precision, so lexical order in SQLite
/// matches chronological order.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_timestamp() -> String {
    format_timestamp(&Utc::now())
}

/// Reify a stored timestamp column into a typed value for responses
pub fn parse_stored_timestamp(column: &str, value: &str) -> Result<DateTime<Utc>, ApiError> {
    parse_timestamp(value).ok_or_else(|| {
        ApiError::InternalServer(format!("unparseable {} value in store: {}", column, value))
    })
}
