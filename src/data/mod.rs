//! Data models for the news backend API
//!
//! These types mirror the JSON shapes the backend returns for articles,
//! categories, and search results. Collections arrive wrapped in a list
//! envelope carrying the total count.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A condensed article as it appears in listings and search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Backend identifier
    pub id: u64,
    /// URL-safe identifier used to fetch the full article
    pub slug: String,
    /// Headline
    pub title: String,
    /// One-paragraph teaser
    pub summary: String,
    /// Slug of the category the article belongs to
    pub category: String,
    /// Byline, if the backend has one
    pub author: Option<String>,
    /// Publication timestamp
    pub published_at: DateTime<Utc>,
}

/// A full article, including the body text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Backend identifier
    pub id: u64,
    /// URL-safe identifier
    pub slug: String,
    /// Headline
    pub title: String,
    /// One-paragraph teaser
    pub summary: String,
    /// Full body text
    pub body: String,
    /// Slug of the category the article belongs to
    pub category: String,
    /// Byline, if the backend has one
    pub author: Option<String>,
    /// Publication timestamp
    pub published_at: DateTime<Utc>,
}

/// A content category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Backend identifier
    pub id: u64,
    /// URL-safe identifier used in article listings
    pub slug: String,
    /// Display name
    pub name: String,
    /// Optional blurb describing the section
    pub description: Option<String>,
}

/// Envelope the backend wraps collection responses in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    /// The page of results
    pub items: Vec<T>,
    /// Total number of matching records on the backend
    pub total: u64,
}
