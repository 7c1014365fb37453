// src/entries/validators.rs

use super::models::{CreateEntryRequest, UpdateEntryRequest};
use crate::common::validation::{parse_timestamp, require_min_chars};
use crate::common::{ValidationResult, Validator};

const MIN_TEXT_CHARS: usize = 3;

pub struct EntryValidator;

impl Validator<CreateEntryRequest> for EntryValidator {
    fn validate(&self, data: &CreateEntryRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        require_min_chars(&mut result, "name", &data.name, MIN_TEXT_CHARS);
        require_min_chars(&mut result, "description", &data.description, MIN_TEXT_CHARS);

        if parse_timestamp(&data.date_time).is_none() {
            result.add_error("dateTime", "Invalid date");
        }

        result
    }
}

/// Only supplied fields are checked; an empty update is valid.
impl Validator<UpdateEntryRequest> for EntryValidator {
    fn validate(&self, data: &UpdateEntryRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(name) = &data.name {
            require_min_chars(&mut result, "name", name, MIN_TEXT_CHARS);
        }

        if let Some(description) = &data.description {
            require_min_chars(&mut result, "description", description, MIN_TEXT_CHARS);
        }

        if let Some(date_time) = &data.date_time {
            if parse_timestamp(date_time).is_none() {
                result.add_error("dateTime", "Invalid date");
            }
        }

        result
    }
}
