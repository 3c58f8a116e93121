//! Records extracted from trending pages

use serde::Serialize;

/// Anything that can be opened by position from a listing
pub trait Listing {
    /// Absolute URL of the entry
    fn url(&self) -> &str;
}

/// One row of the trending repositories page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendingRepository {
    /// Path-like identifier, e.g. `/rust-lang/rust`
    pub repo_name: String,
    pub description: String,
    /// Star count as shown on the page, e.g. `12,345`
    pub stars: String,
    pub language: String,
    pub url: String,
}

/// One row of the trending developers page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendingDeveloper {
    pub dev_name: String,
    /// The developer's highlighted repository
    pub repo_name: String,
    /// Empty rather than "N/A" when absent
    pub description: String,
    pub url: String,
}

impl Listing for TrendingRepository {
    fn url(&self) -> &str {
        &self.url
    }
}

impl Listing for TrendingDeveloper {
    fn url(&self) -> &str {
        &self.url
    }
}
