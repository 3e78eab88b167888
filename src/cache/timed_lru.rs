//! Timed LRU cache for parsed API responses
//!
//! Stores deserialized JSON payloads keyed by request, bounded by a fixed
//! capacity with least-recently-used eviction, and bounded in time by a
//! per-entry TTL. Recency is tracked with a monotonic logical clock that is
//! bumped on every insert and every successful read, so the eviction victim
//! is always the entry that has gone longest without being touched.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;
use serde_json::Value;

/// Default maximum number of cached responses.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;

/// Default freshness window for a cached response (5 minutes).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// A single cached response payload
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The parsed response body
    value: Value,
    /// When the entry was written
    stored_at: Instant,
    /// Logical-clock tick of the last insert or read, higher is fresher
    last_used: u64,
}

/// Bounded key/value cache with per-entry TTL and LRU eviction
///
/// The cache never errors: `get` on a missing or expired key returns `None`,
/// `set` always succeeds (evicting the least recently used entry if needed),
/// and `clear` drops everything. A cache constructed with zero capacity
/// stores nothing, which is how caching is disabled.
///
/// Methods take `&mut self`; callers on a multi-threaded runtime wrap the
/// cache in a `Mutex` (see `ApiClient`).
#[derive(Debug)]
pub struct TimedLruCache {
    capacity: usize,
    ttl: Duration,
    tick: u64,
    entries: HashMap<String, CacheEntry>,
}

impl TimedLruCache {
    /// Creates a cache holding at most `capacity` entries, each served for
    /// at most `ttl` after it was stored.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            tick: 0,
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Creates a cache with the default capacity and TTL.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL)
    }

    /// Looks up a cached value.
    ///
    /// Returns `None` for a missing key. An entry older than the TTL is
    /// removed and treated as missing; expired values are never served.
    /// A fresh hit marks the entry as most recently used and returns a
    /// clone of the stored value.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let expired = match self.entries.get(key) {
            None => return None,
            Some(entry) => entry.stored_at.elapsed() > self.ttl,
        };

        if expired {
            self.entries.remove(key);
            debug!("cache entry expired: {key}");
            return None;
        }

        self.tick += 1;
        let entry = self.entries.get_mut(key)?;
        entry.last_used = self.tick;
        Some(entry.value.clone())
    }

    /// Stores a value, overwriting any existing entry for the key.
    ///
    /// When the cache is full and the key is new, the least recently used
    /// entry is evicted first. Overwriting an existing key never triggers
    /// eviction. The entry's age resets to now either way.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        if self.capacity == 0 {
            return;
        }

        let key = key.into();
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_lru();
        }

        self.tick += 1;
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
                last_used: self.tick,
            },
        );
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Current number of entries, expired ones included until a `get`
    /// discovers them.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Freshness window applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Removes the entry with the smallest logical-clock tick.
    ///
    /// Recency alone decides the victim; remaining TTL does not factor in.
    fn evict_lru(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone());

        if let Some(key) = victim {
            self.entries.remove(&key);
            debug!("cache evicted least recently used entry: {key}");
        }
    }
}
