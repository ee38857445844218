//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. The store location is required, everything else has a
//! development default.
use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::openrouter::client::{DEFAULT_TIMEOUT, OPENROUTER_BASE_URL};

#[derive(Clone)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub openrouter_base_url: String,
    pub openrouter_timeout: Duration,
    pub store_url: String,
    pub db_name: String,
    pub api_host: String,
    pub api_port: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openrouter_api_key", &self.openrouter_api_key.as_ref().map(|_| "<redacted>"))
            .field("openrouter_base_url", &self.openrouter_base_url)
            .field("openrouter_timeout", &self.openrouter_timeout)
            .field("store_url", &self.store_url)
            .field("db_name", &self.db_name)
            .field("api_host", &self.api_host)
            .field("api_port", &self.api_port)
            .finish()
    }
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::Config(format!("{} must be set", key)))
        };

        let openrouter_timeout = match lookup("OPENROUTER_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!("OPENROUTER_TIMEOUT_SECS must be a whole number, got '{}'", raw))
                })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Config {
            openrouter_api_key: lookup("OPENROUTER_API_KEY").filter(|v| !v.trim().is_empty()),
            openrouter_base_url: lookup("OPENROUTER_BASE_URL").unwrap_or_else(|| OPENROUTER_BASE_URL.to_string()),
            openrouter_timeout,
            store_url: required("STORE_URL")?,
            db_name: required("DB_NAME")?,
            api_host: lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            api_port: lookup("API_PORT").unwrap_or_else(|| "8001".to_string()),
        })
    }

    pub fn print_env_vars() {
        let show = |key: &str| env::var(key).unwrap_or_else(|_| "<unset>".to_string());
        let key_state = if env::var("OPENROUTER_API_KEY").map(|v| !v.is_empty()).unwrap_or(false) {
            "<set>"
        } else {
            "<unset>"
        };
        tracing::info!("OPENROUTER_API_KEY: {}", key_state);
        tracing::info!("OPENROUTER_BASE_URL: {}", show("OPENROUTER_BASE_URL"));
        tracing::info!("OPENROUTER_TIMEOUT_SECS: {}", show("OPENROUTER_TIMEOUT_SECS"));
        tracing::info!("STORE_URL: {}", show("STORE_URL"));
        tracing::info!("DB_NAME: {}", show("DB_NAME"));
        tracing::info!("API_HOST: {}", show("API_HOST"));
        tracing::info!("API_PORT: {}", show("API_PORT"));
    }
}
