use chrono::Duration;

use std::path::PathBuf;

use crate::common::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SESSION_TTL_DAYS: i64 = 30;
const DEFAULT_STATIC_DIR: &str = "./static";

/// Runtime settings read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub session_ttl: Duration,
    pub secure_cookies: bool,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(0) => return Err(invalid("DATABASE_MAX_CONNECTIONS", raw, "must be positive")),
                Ok(n) => n,
                Err(e) => return Err(invalid("DATABASE_MAX_CONNECTIONS", raw, e)),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let session_ttl_days = match get("SESSION_TTL_DAYS") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if n > 0 => n,
                Ok(_) => return Err(invalid("SESSION_TTL_DAYS", raw, "must be positive")),
                Err(e) => return Err(invalid("SESSION_TTL_DAYS", raw, e)),
            },
            None => DEFAULT_SESSION_TTL_DAYS,
        };

        let secure_cookies = match get("SECURE_COOKIES") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| invalid("SECURE_COOKIES", raw, "expected true or false"))?,
            None => false,
        };

        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            session_ttl: Duration::days(session_ttl_days),
            secure_cookies,
            static_dir,
        })
    }
}

fn invalid(key: &'static str, value: String, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        key,
        value,
        reason: reason.to_string(),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
