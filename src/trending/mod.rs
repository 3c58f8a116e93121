//! Trending page scraping
//!
//! This module contains the fetch-parse-extract pipeline:
//! - HTTP fetching with a single timeout and no retries
//! - Lenient HTML parsing of successful responses
//! - Table-driven extraction of repositories and developers
//!
//! Fetch failures and non-200 responses never surface as errors here; the
//! listing simply comes back empty.

mod developers;
mod fetcher;
mod parser;
mod records;
mod repositories;
mod request;
mod selector;

pub use developers::DeveloperExtractor;
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use parser::{parse_document, parse_page, ParsedPage};
pub use records::{Listing, TrendingDeveloper, TrendingRepository};
pub use repositories::RepositoryExtractor;
pub use request::{Timespan, TrendingRequest};
pub use selector::{Extract, Field, FieldRule, SENTINEL};

use crate::config::Config;
use crate::Result;
use reqwest::Client;
use std::time::Duration;

/// Client for the trending repositories and developers pages
///
/// Holds one HTTP client and the compiled extractors; every call is a fresh
/// fetch with nothing cached between calls.
#[derive(Debug, Clone)]
pub struct TrendingClient {
    client: Client,
    timeout: Duration,
    trending_url: String,
    developers_url: String,
    repositories: RepositoryExtractor,
    developers: DeveloperExtractor,
}

impl TrendingClient {
    /// Builds the HTTP client and compiles the extractors
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: build_http_client(&config.http)?,
            timeout: Duration::from_secs(config.http.timeout_secs),
            trending_url: config.site.trending_url.clone(),
            developers_url: config.site.developers_url.clone(),
            repositories: RepositoryExtractor::new(config.site.home_page.as_str())?,
            developers: DeveloperExtractor::new(config.site.home_page.as_str())?,
        })
    }

    /// Lists trending repositories, empty when the page could not be fetched
    pub async fn repositories(&self, request: &TrendingRequest) -> Vec<TrendingRepository> {
        let url = request.url(&self.trending_url);
        tracing::info!("Fetching trending repositories ({}) from {}", request.timespan, url);

        match self.fetch(&url).await {
            Some(document) => self.repositories.extract(&document),
            None => Vec::new(),
        }
    }

    /// Lists trending developers, empty when the page could not be fetched
    pub async fn developers(&self, request: &TrendingRequest) -> Vec<TrendingDeveloper> {
        let url = request.url(&self.developers_url);
        tracing::info!("Fetching trending developers ({}) from {}", request.timespan, url);

        match self.fetch(&url).await {
            Some(document) => self.developers.extract(&document),
            None => Vec::new(),
        }
    }

    async fn fetch(&self, url: &str) -> Option<scraper::Html> {
        parse_page(&self.client, url, self.timeout).await.document
    }
}
