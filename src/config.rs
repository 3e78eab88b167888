//! Runtime configuration for the backend API client
//!
//! Configuration comes from environment variables (loaded from `.env` by
//! `main` before parsing), with CLI flags layered on top. The client treats
//! the resulting values as opaque constants.

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::cache::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL};

/// Default backend base URL when `NEWSWIRE_BASE_URL` is unset
const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable that should be a number was not one
    #[error("invalid value for {name}: '{value}' (expected a non-negative integer)")]
    InvalidNumber { name: String, value: String },
}

/// Settings for the API client and its response cache
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without a trailing slash
    pub base_url: String,
    /// Optional API key sent as the `X-Api-Key` header
    pub api_key: Option<String>,
    /// Per-request timeout budget
    pub timeout: Duration,
    /// Maximum number of cached responses
    pub cache_capacity: usize,
    /// Freshness window for cached responses
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl Config {
    /// Builds a Config from `NEWSWIRE_*` environment variables, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests supply a map instead of touching the
    /// process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let base_url = get("NEWSWIRE_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let api_key = get("NEWSWIRE_API_KEY").filter(|key| !key.is_empty());

        let timeout = match get("NEWSWIRE_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_number("NEWSWIRE_TIMEOUT_SECS", &raw)?),
            None => defaults.timeout,
        };
        let cache_capacity = match get("NEWSWIRE_CACHE_CAPACITY") {
            Some(raw) => parse_number("NEWSWIRE_CACHE_CAPACITY", &raw)? as usize,
            None => defaults.cache_capacity,
        };
        let cache_ttl = match get("NEWSWIRE_CACHE_TTL_SECS") {
            Some(raw) => Duration::from_secs(parse_number("NEWSWIRE_CACHE_TTL_SECS", &raw)?),
            None => defaults.cache_ttl,
        };

        Ok(Self {
            base_url,
            api_key,
            timeout,
            cache_capacity,
            cache_ttl,
        })
    }

    /// Overrides the base URL, trimming any trailing slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disables response caching by dropping the cache capacity to zero.
    pub fn without_cache(mut self) -> Self {
        self.cache_capacity = 0;
        self
    }
}

fn parse_number(name: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        name: name.to_string(),
        value: value.to_string(),
    })
}
