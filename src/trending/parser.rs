//! HTML parser for fetched trending pages
//!
//! A page is only parsed when it was served with status 200. Parsing uses
//! html5ever's lenient document parser, so truncated or malformed markup
//! still yields a tree.

use crate::trending::fetcher::{fetch_page, FetchOutcome};
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// A fetched page together with the status it was served with
#[derive(Debug)]
pub struct ParsedPage {
    /// Document tree, present only for status 200
    pub document: Option<Html>,

    /// HTTP status code, `None` when the connection failed
    pub status: Option<u16>,
}

/// Fetches `url` and parses the body when the status is 200
///
/// # Example
///
/// ```no_run
/// use github_trending::config::HttpConfig;
/// use github_trending::trending::{build_http_client, parse_page};
/// use std::time::Duration;
///
/// # async fn example() {
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// let page = parse_page(&client, "http://github.com/trending", Duration::from_secs(5)).await;
/// if let Some(document) = page.document {
///     println!("{}", document.root_element().html().len());
/// }
/// # }
/// ```
pub async fn parse_page(client: &Client, url: &str, timeout: Duration) -> ParsedPage {
    let outcome = fetch_page(client, url, timeout).await;
    let status = outcome.status_code();

    let document = match outcome {
        FetchOutcome::Response {
            status_code: 200,
            body,
        } => Some(parse_document(&body)),
        FetchOutcome::Response { status_code, .. } => {
            tracing::warn!("{} answered {}, skipping parse", url, status_code);
            None
        }
        FetchOutcome::ConnectionFailed { .. } => None,
    };

    ParsedPage { document, status }
}

/// Parses HTML text into a document tree
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}
