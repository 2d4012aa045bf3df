//! Process Configuration
//!
//! Everything is read from the environment once at startup. `STORE_URL`
//! and `STORE_API_KEY` are required; absence of either is a startup-time
//! misconfiguration, not a per-request condition.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::http_server::HttpServerConfig;
use crate::store::StoreConfig;

const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;

/// Startup-time misconfiguration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {message}")]
    InvalidVar {
        name: &'static str,
        message: String,
    },
}

/// Everything the process needs, resolved once in main
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub http: HttpServerConfig,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is absent or a
    /// value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut raw_url = required("STORE_URL")?;
        // REST paths are joined onto the endpoint, so it must end with a
        // slash or Url::join would drop the last path segment.
        if !raw_url.ends_with('/') {
            raw_url.push('/');
        }
        let url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidVar {
            name: "STORE_URL",
            message: e.to_string(),
        })?;
        let api_key = required("STORE_API_KEY")?;
        let timeout_secs = optional_parse("STORE_TIMEOUT_SECS", DEFAULT_STORE_TIMEOUT_SECS)?;

        let mut http = HttpServerConfig::default();
        if let Ok(host) = env::var("BIND_HOST") {
            if !host.is_empty() {
                http.host = host;
            }
        }
        http.port = optional_parse("BIND_PORT", http.port)?;
        if let Ok(origins) = env::var("CORS_ORIGINS") {
            http.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(Self {
            store: StoreConfig {
                url,
                api_key,
                timeout: Duration::from_secs(timeout_secs),
            },
            http,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn optional_parse<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) if !value.is_empty() => value.parse().map_err(|e: T::Err| {
            ConfigError::InvalidVar {
                name,
                message: e.to_string(),
            }
        }),
        _ => Ok(default),
    }
}
