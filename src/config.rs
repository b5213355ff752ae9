use std::str::FromStr;

use anyhow::{Context, Result};
use validator::Validate;

pub const HOST_ENV: &str = "ALERTMGR_HOST";
pub const PORT_ENV: &str = "ALERTMGR_PORT";
pub const MAX_BATCH_SIZE_ENV: &str = "ALERTMGR_MAX_BATCH_SIZE";

/// Server settings read from the environment, with `.env` support.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub host: String,

    #[validate(range(min = 1))]
    pub port: u16,

    /// Largest accepted array on the batch endpoint.
    #[validate(range(min = 1, max = 1000))]
    pub max_batch_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_batch_size: 100,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: lookup(HOST_ENV)
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.host),
            port: parse_or(&lookup, PORT_ENV, defaults.port)?,
            max_batch_size: parse_or(&lookup, MAX_BATCH_SIZE_ENV, defaults.max_batch_size)?,
        };

        config
            .validate()
            .with_context(|| format!("invalid server configuration: {:?}", config))?;

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", key, raw)),
        None => Ok(default),
    }
}
