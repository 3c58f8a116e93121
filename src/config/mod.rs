//! Configuration module for github-trending
//!
//! Every setting has a built-in default, so a configuration file is optional.
//! When one is given it is parsed as TOML and validated before use.
//!
//! # Example
//!
//! ```no_run
//! use github_trending::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("trending.toml")).unwrap();
//! println!("Request timeout: {}s", config.http.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HttpConfig, SiteConfig, DEFAULT_DEVELOPERS_URL, DEFAULT_HOME_PAGE,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TRENDING_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, load_optional_config, parse_config};
