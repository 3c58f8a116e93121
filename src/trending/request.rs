//! Trending page request options and URL construction

use std::fmt;

/// Ranking window of a trending page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Timespan {
    /// Site default, sent without a query parameter
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Timespan {
    /// Value of the `since` query parameter, `None` for the daily default
    pub fn since(&self) -> Option<&'static str> {
        match self {
            Self::Daily => None,
            Self::Weekly => Some("weekly"),
            Self::Monthly => Some("monthly"),
        }
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.since().unwrap_or("daily"))
    }
}

/// Options shared by the repository and developer listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendingRequest {
    /// Language path segment, used verbatim
    pub language: Option<String>,
    pub timespan: Timespan,
}

impl TrendingRequest {
    pub fn new(language: Option<String>, timespan: Timespan) -> Self {
        Self { language, timespan }
    }

    /// Builds `<base>[/<language>][?since=<timespan>]`
    ///
    /// The language is neither escaped nor validated, and an empty language
    /// is treated as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use github_trending::trending::{Timespan, TrendingRequest};
    ///
    /// let request = TrendingRequest::new(Some("python".to_string()), Timespan::Weekly);
    /// assert_eq!(
    ///     request.url("http://github.com/trending"),
    ///     "http://github.com/trending/python?since=weekly"
    /// );
    /// ```
    pub fn url(&self, base: &str) -> String {
        let mut url = base.to_string();

        if let Some(language) = self.language.as_deref().filter(|l| !l.is_empty()) {
            url.push('/');
            url.push_str(language);
        }

        if let Some(since) = self.timespan.since() {
            url.push_str("?since=");
            url.push_str(since);
        }

        url
    }
}
