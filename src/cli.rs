//! Command-line interface parsing for the newswire client
//!
//! This module defines the clap argument surface: global connection flags
//! plus one subcommand per backend read. Flag values override whatever came
//! from the environment.

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// Newswire - read articles from the news backend
#[derive(Parser, Debug)]
#[command(name = "newswire")]
#[command(about = "Read headlines, articles, and categories from the news backend")]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides NEWSWIRE_BASE_URL)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides NEWSWIRE_TIMEOUT_SECS)
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Bypass the response cache and always fetch from the backend
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Backend reads exposed as subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the latest headlines
    Headlines {
        /// Only show articles from this category slug
        #[arg(long, value_name = "SLUG")]
        category: Option<String>,

        /// Maximum number of articles to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Show a single article
    Article {
        /// Slug of the article to fetch
        slug: String,
    },

    /// List available categories
    Categories,

    /// Search articles by keyword
    Search {
        /// Search query
        query: String,

        /// Maximum number of results to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

impl Cli {
    /// Applies CLI flag overrides on top of an environment-derived Config.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if self.no_cache {
            config = config.without_cache();
        }
        config
    }
}
