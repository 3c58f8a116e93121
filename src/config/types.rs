use serde::Deserialize;

/// Site every record URL is rooted at
pub const DEFAULT_HOME_PAGE: &str = "https://github.com";

/// Trending repositories page
pub const DEFAULT_TRENDING_URL: &str = "http://github.com/trending";

/// Trending developers page
pub const DEFAULT_DEVELOPERS_URL: &str = "http://github.com/trending/developers";

/// Desktop browser string sent as `User-Agent`
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.7; rv:11.0) Gecko/20100101 Firefox/11.0";

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Main configuration structure for github-trending
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Where the trending pages live
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin prepended to every extracted path
    #[serde(rename = "home-page")]
    pub home_page: String,

    /// Base URL of the trending repositories page
    #[serde(rename = "trending-url")]
    pub trending_url: String,

    /// Base URL of the trending developers page
    #[serde(rename = "developers-url")]
    pub developers_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_page: DEFAULT_HOME_PAGE.to_string(),
            trending_url: DEFAULT_TRENDING_URL.to_string(),
            developers_url: DEFAULT_DEVELOPERS_URL.to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Skip TLS certificate verification
    #[serde(rename = "accept-invalid-certs")]
    pub accept_invalid_certs: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: true,
        }
    }
}
