//! Runtime configuration from environment variables
//!
//! `.env` is loaded by `main` through dotenvy before anything is read, so
//! both sources work. [`LogFormat`] resolves on its own because the
//! subscriber has to exist before the rest of the configuration logs.

use std::time::Duration;

use thiserror::Error;
use tracing::info;

pub const DEFAULT_DATABASE_URL: &str = "memory://";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MOUNT_ROOT: &str = "/api";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// `LOG_FORMAT`: `pretty` (default) or `json`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => Ok(Self::Pretty),
            Some("json") => Ok(Self::Json),
            Some(other) => Err(ConfigError::Invalid {
                name: "LOG_FORMAT",
                expected: "'pretty' or 'json'",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Persistence engine connection string
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Prefix the entry adapter strips before dispatch
    pub mount_root: String,
    pub ai_backend_url: Option<String>,
    pub ai_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            mount_root: DEFAULT_MOUNT_ROOT.to_string(),
            ai_backend_url: None,
            ai_timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL").unwrap_or_else(|| {
            info!("DATABASE_URL not set, using default: {}", DEFAULT_DATABASE_URL);
            defaults.database_url.clone()
        });

        let port = match var("HUB_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "HUB_PORT",
                expected: "a TCP port number",
                value: raw.clone(),
            })?,
            None => defaults.port,
        };

        let ai_timeout = match var("AI_BACKEND_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "AI_BACKEND_TIMEOUT_SECS",
                        expected: "a positive number of seconds",
                        value: raw,
                    })
                }
            },
            None => defaults.ai_timeout,
        };

        let log_format = LogFormat::from_lookup(&lookup)?;

        Ok(Self {
            database_url,
            host: var("HUB_HOST").unwrap_or(defaults.host),
            port,
            mount_root: normalize_mount_root(
                &var("HUB_MOUNT_ROOT").unwrap_or(defaults.mount_root),
            ),
            ai_backend_url: var("AI_BACKEND_URL"),
            ai_timeout,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Leading slash, no trailing slash; the empty string disables the prefix
pub fn normalize_mount_root(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
