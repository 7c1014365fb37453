// src/common/config.rs
//! Runtime configuration loaded from the environment (and `.env`)

use std::env;
use std::str::FromStr;
use tracing::{info, warn};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://diet_api.db";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "sessionId";
pub const DEFAULT_SESSION_MAX_AGE_DAYS: i64 = 7;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub session: SessionConfig,
    pub reset_db: bool,
}

/// How the session token travels to and from the client
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub max_age_days: i64,
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            max_age_days: DEFAULT_SESSION_MAX_AGE_DAYS,
            secure: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let session = SessionConfig {
            cookie_name: env::var("SESSION_COOKIE_NAME")
                .ok()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SESSION_COOKIE_NAME.to_string()),
            max_age_days: parse_or("SESSION_MAX_AGE_DAYS", DEFAULT_SESSION_MAX_AGE_DAYS),
            secure: flag("COOKIE_SECURE"),
        };

        Self {
            database_url,
            port: parse_or("PORT", DEFAULT_PORT),
            cors_origins,
            session,
            reset_db: flag("RESET_DB"),
        }
    }

    pub fn log_summary(&self) {
        info!(
            database_url = %self.database_url,
            port = self.port,
            cors_origins = ?self.cors_origins,
            cookie_name = %self.session.cookie_name,
            session_max_age_days = self.session.max_age_days,
            cookie_secure = self.session.secure,
            reset_db = self.reset_db,
            "Configuration loaded"
        );
    }
}

fn flag(key: &str) -> bool {
    env::var(key)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {key} value '{raw}', using default: {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let session = SessionConfig::default();
        assert_eq!(session.cookie_name, "sessionId");
        assert_eq!(session.max_age_days, 7);
        assert!(!session.secure);
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        env::set_var("DIET_API_TEST_PORT_GARBAGE", "not-a-port");
        assert_eq!(parse_or("DIET_API_TEST_PORT_GARBAGE", 8080u16), 8080);

        env::set_var("DIET_API_TEST_PORT_OK", " 3333 ");
        assert_eq!(parse_or("DIET_API_TEST_PORT_OK", 8080u16), 3333);

        assert_eq!(parse_or("DIET_API_TEST_PORT_UNSET", 42i64), 42);
    }

    #[test]
    fn test_flag() {
        env::set_var("DIET_API_TEST_FLAG_ON", "TRUE");
        env::set_var("DIET_API_TEST_FLAG_OFF", "yes");
        assert!(flag("DIET_API_TEST_FLAG_ON"));
        assert!(!flag("DIET_API_TEST_FLAG_OFF"));
        assert!(!flag("DIET_API_TEST_FLAG_UNSET"));
    }
}
