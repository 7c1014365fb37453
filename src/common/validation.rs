// Common validation types and traits

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Fails with a `ValidationError` when any error was recorded.
    pub fn into_result(self) -> Result<(), super::ApiError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.into())
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}

/// Records an error unless `value` has at least `min` characters.
pub fn require_min_chars(result: &mut ValidationResult, field: &str, value: &str, min: usize) {
    if value.chars().count() < min {
        result.add_error(
            field,
            &format!("{} must be at least {} characters", capitalize(field), min),
        );
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parses the timestamp formats clients send for `dateTime` and `birth`.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.fff]` and bare `YYYY-MM-DD`.
/// Values without an offset are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_timestamp_formats() {
        let rfc = parse_timestamp("2023-08-03T20:32:53.120Z").unwrap();
        assert_eq!(rfc.hour(), 20);
        assert_eq!(rfc.timestamp_subsec_millis(), 120);

        let offset = parse_timestamp("2023-08-03T20:32:53-03:00").unwrap();
        assert_eq!(offset.hour(), 23);

        let spaced = parse_timestamp("2023-08-03 20:32:53").unwrap();
        assert_eq!(spaced.minute(), 32);

        let date_only = parse_timestamp("1990-05-17").unwrap();
        assert_eq!(date_only.year(), 1990);
        assert_eq!(date_only.hour(), 0);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2023-13-40").is_none());
    }

    #[test]
    fn test_require_min_chars() {
        let mut result = ValidationResult::new();
        require_min_chars(&mut result, "name", "ab", 3);
        require_min_chars(&mut result, "description", " ab", 3);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "name");
        assert_eq!(result.errors[0].message, "Name must be at least 3 characters");
    }
}
