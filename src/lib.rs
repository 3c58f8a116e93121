//! github-trending: trending repositories and developers from the terminal
//!
//! This crate fetches GitHub's public trending pages, extracts the listed
//! repositories or developers from the markup, and hands the records to a
//! presenter (terminal, JSON or the default browser).

pub mod config;
pub mod dispatch;
pub mod output;
pub mod trending;

use thiserror::Error;

/// Main error type for github-trending operations
///
/// Fetch and parse failures are deliberately absent: the extractors degrade
/// those to an empty listing instead of raising.
#[derive(Debug, Error)]
pub enum TrendingError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("Nothing to open at position {position}: the listing is empty (the trending page may have failed to load; rerun with -v for details)")]
    EmptyListing { position: usize },

    #[error("No entry at position {index} (listing has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to open {url} in a browser: {source}")]
    Browser {
        url: String,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for github-trending operations
pub type Result<T> = std::result::Result<T, TrendingError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use dispatch::{plan, Action, Listings, Section};
pub use trending::{
    Listing, Timespan, TrendingClient, TrendingDeveloper, TrendingRepository, TrendingRequest,
};
