// config.rs - Runtime configuration for the admin client
//
// Settings come from environment variables (the CLI loads `.env` first).
// In the browser the backend is the page's own origin.

use std::time::Duration;

use thiserror::Error;

use crate::web_app::model::DEFAULT_ITEMS_PER_PAGE;

pub const API_URL_VAR: &str = "INVENTORY_API_URL";
pub const PER_PAGE_VAR: &str = "INVENTORY_PER_PAGE";
pub const TIMEOUT_VAR: &str = "INVENTORY_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive whole number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Where the backend lives and how the list is paged
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminConfig {
    pub api_base_url: String,
    pub items_per_page: u32,
    pub request_timeout_secs: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AdminConfig {
    /// Read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::Empty(API_URL_VAR));
            }
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(value) = lookup(PER_PAGE_VAR) {
            config.items_per_page = parse_positive(PER_PAGE_VAR, &value)? as u32;
        }

        if let Some(value) = lookup(TIMEOUT_VAR) {
            config.request_timeout_secs = parse_positive(TIMEOUT_VAR, &value)?;
        }

        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Same-origin configuration for the browser build
    #[cfg(feature = "csr")]
    pub fn from_browser() -> Self {
        let origin = leptos::prelude::window()
            .location()
            .origin()
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self {
            api_base_url: origin,
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(u64::from(n)),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_positive_rejects_zero_and_garbage() {
        assert!(parse_positive(PER_PAGE_VAR, "0").is_err());
        assert!(parse_positive(PER_PAGE_VAR, "-3").is_err());
        assert!(parse_positive(PER_PAGE_VAR, "ten").is_err());
        assert_eq!(parse_positive(PER_PAGE_VAR, " 25 "), Ok(25));
    }
}
