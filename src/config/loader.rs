//! Load settings from the process environment (optionally seeded from `.env`).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

impl Settings {
    /// Read `.env` if present, then the environment. The `.env` path is kept in
    /// `env_file` so the caller can log it once tracing is up.
    pub fn load() -> Result<Settings, ConfigError> {
        let env_file = dotenvy::dotenv().ok();
        let mut settings = Self::from_lookup(|key| std::env::var(key).ok())?;
        settings.env_file = env_file;
        Ok(settings)
    }

    /// Build settings from an arbitrary key lookup. Unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::Invalid {
                key: "DATABASE_URL",
                value: database_url,
                reason: "only sqlite: URLs are supported".into(),
            });
        }
        let bind_addr = parse("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR)?;
        let max_connections = parse(
            "DB_MAX_CONNECTIONS",
            get("DB_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        require_positive("DB_MAX_CONNECTIONS", max_connections as usize)?;
        let body_limit_bytes = parse(
            "BODY_LIMIT_BYTES",
            get("BODY_LIMIT_BYTES"),
            DEFAULT_BODY_LIMIT_BYTES,
        )?;
        require_positive("BODY_LIMIT_BYTES", body_limit_bytes)?;
        let log_filter = get("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            body_limit_bytes,
            log_filter,
            env_file: None,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            log_filter: DEFAULT_LOG_FILTER.into(),
            env_file: None,
        }
    }
}

fn parse<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = value else {
        return Ok(default);
    };
    raw.parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value: raw.clone(),
    })
}

fn require_positive(key: &'static str, n: usize) -> Result<(), ConfigError> {
    if n == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: n.to_string(),
            reason: "must be at least 1".into(),
        });
    }
    Ok(())
}
