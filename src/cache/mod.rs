//! In-memory response cache for backend API calls
//!
//! This module provides a bounded key/value cache with per-entry TTL
//! (time-to-live) and least-recently-used eviction. It sits in front of the
//! HTTP client so repeated identical reads within the freshness window are
//! served without a network round-trip.

mod timed_lru;

pub use timed_lru::{TimedLruCache, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL};
