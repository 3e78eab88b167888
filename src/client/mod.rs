//! HTTP client for the news backend
//!
//! Provides `ApiClient`, a thin wrapper around `reqwest` that consults an
//! in-memory timed LRU cache before going to the network. Only successful,
//! fully-parsed JSON responses populate the cache; every failure path is
//! surfaced to the caller and cached never.

mod endpoints;

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;

use crate::cache::TimedLruCache;
use crate::config::Config;

/// Errors surfaced by backend API calls
///
/// The cache itself never fails; everything here belongs to the fetch path.
/// No variant is ever stored in the cache.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status
    #[error("backend returned HTTP {0}")]
    UpstreamStatus(u16),

    /// The request did not complete within the timeout budget
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// DNS, connection, or other transport-level failure
    #[error("transport failure: {0}")]
    Transport(reqwest::Error),

    /// The response body was not the JSON we expected
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Client for the news backend REST API
///
/// Owns the HTTP connection pool, the configuration, and the response cache.
/// Construct one per process (or per test) and share it by reference; there
/// is no hidden global instance.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
    cache: Mutex<TimedLruCache>,
}

impl ApiClient {
    /// Creates a client from the given configuration.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::Transport)?;
        let cache = Mutex::new(TimedLruCache::new(config.cache_capacity, config.cache_ttl));
        Ok(Self {
            http,
            config,
            cache,
        })
    }

    /// Performs a cached GET against `path` (relative to the base URL).
    ///
    /// The cache key is derived from the method and the full request URL,
    /// query string included, so two logically different requests never
    /// share an entry. On a hit the stored payload is returned without any
    /// network I/O. On a miss the request runs under the configured timeout,
    /// the body is parsed as JSON, and the parsed value is stored before
    /// being returned.
    ///
    /// Concurrent misses on the same key each fetch independently and the
    /// last writer wins; there is no request coalescing.
    pub async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        let mut builder = self.http.get(url.as_str()).timeout(self.config.timeout);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(api_key) = &self.config.api_key {
            builder = builder.header("X-Api-Key", api_key);
        }
        let request = builder.build().map_err(|err| self.classify(err))?;
        let key = request_key(request.method().as_str(), request.url().as_str(), None);

        if let Some(value) = self.lock_cache().get(&key) {
            debug!("cache hit: {key}");
            return Ok(value);
        }
        debug!("cache miss: {key}");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        if !status.is_success() {
            warn!("backend returned HTTP {status} for {url}");
            return Err(ApiError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(|err| self.classify(err))?;
        let value: Value = serde_json::from_str(&body)?;

        self.lock_cache().set(key, value.clone());
        Ok(value)
    }

    /// Drops every cached response.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    /// Number of responses currently cached.
    pub fn cached_responses(&self) -> usize {
        self.lock_cache().len()
    }

    /// Sorts timeouts out from the rest of the transport failures so callers
    /// can retry or message them specifically.
    fn classify(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.config.timeout)
        } else {
            ApiError::Transport(err)
        }
    }

    /// Locks the cache, recovering the guard if a panicking test poisoned it.
    fn lock_cache(&self) -> MutexGuard<'_, TimedLruCache> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Builds the deterministic cache key for a request.
///
/// Identical requests always collide; requests differing in method, URL
/// (query string included), or body never do. GET reads carry no body, so
/// their keys reduce to `"GET <url>"`.
fn request_key(method: &str, url: &str, body: Option<&str>) -> String {
    match body {
        Some(body) => format!("{method} {url} {body}"),
        None => format!("{method} {url}"),
    }
}
