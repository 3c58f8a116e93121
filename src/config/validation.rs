use crate::config::types::{Config, HttpConfig, SiteConfig};
use crate::{ConfigError, ConfigResult};
use url::Url;

const MAX_TIMEOUT_SECS: u64 = 120;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_site_config(&config.site)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates the site URLs
fn validate_site_config(config: &SiteConfig) -> ConfigResult<()> {
    validate_http_url("home-page", &config.home_page)?;
    validate_http_url("trending-url", &config.trending_url)?;
    validate_http_url("developers-url", &config.developers_url)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> ConfigResult<()> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    Ok(())
}

/// Checks that `value` parses as an absolute http(s) URL
fn validate_http_url(key: &str, value: &str) -> ConfigResult<()> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", key, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            key,
            url.scheme()
        )));
    }

    Ok(())
}
