//! Signup validation

use regex::Regex;
use std::sync::OnceLock;

use super::models::CreateUserRequest;
use crate::common::validation::{parse_timestamp, require_min_chars};
use crate::common::{ValidationResult, Validator};

const MIN_NICKNAME_CHARS: usize = 3;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

pub struct SignupValidator;

impl Validator<CreateUserRequest> for SignupValidator {
    fn validate(&self, data: &CreateUserRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Name is required");
        }

        require_min_chars(&mut result, "nickname", &data.nickname, MIN_NICKNAME_CHARS);

        if !email_pattern().is_match(&data.email) {
            result.add_error("email", "Invalid email");
        }

        if parse_timestamp(&data.birth).is_none() {
            result.add_error("birth", "Invalid date");
        }

        result
    }
}
