//! Newswire client library
//!
//! A client for the news backend REST API: an in-memory timed LRU response
//! cache, a fetch wrapper that consults it, typed endpoint helpers, and the
//! CLI surface. Exposed as a library so integration tests can drive the
//! pieces directly.

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod data;
