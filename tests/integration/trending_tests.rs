//! Integration tests for the trending client
//!
//! These tests use wiremock to serve fixture trending pages and exercise the
//! full fetch-parse-extract pipeline end-to-end.

use github_trending::config::{Config, DEFAULT_USER_AGENT};
use github_trending::output::{render_json, resolve_nth};
use github_trending::trending::{build_http_client, parse_page, SENTINEL};
use github_trending::{plan, Action, Listings, Timespan, TrendingClient, TrendingRequest};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Points every site URL at the mock server
fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.site.home_page = "https://github.com".to_string();
    config.site.trending_url = format!("{}/trending", base_url);
    config.site.developers_url = format!("{}/trending/developers", base_url);
    config.http.timeout_secs = 2;
    config
}

fn repo_row(name: &str, stars: &str) -> String {
    format!(
        r#"<article class="Box-row">
  <h2 class="h3 lh-condensed"><a href="{name}">{name}</a></h2>
  <p class="col-9 color-fg-muted my-1 pr-4">Description of {name}</p>
  <span itemprop="programmingLanguage">Rust</span>
  <a href="{name}/stargazers"><svg></svg> {stars}</a>
</article>"#
    )
}

fn dev_row(login: &str) -> String {
    format!(
        r#"<article class="Box-row d-flex">
  <h1 class="h3 lh-condensed"><a href="/{login}"> {login} </a></h1>
  <h1 class="h4 lh-condensed"><a href="/{login}/tool"><svg></svg> tool </a></h1>
  <div class="f6 color-fg-muted mt-1">A tool by {login}</div>
</article>"#
    )
}

fn html_page(rows: &[String]) -> String {
    format!(
        "<html><head><title>Trending</title></head><body>{}</body></html>",
        rows.join("\n")
    )
}

#[tokio::test]
async fn test_repositories_from_mock_page() {
    let mock_server = MockServer::start().await;

    let rows: Vec<String> = (1..=25)
        .map(|i| repo_row(&format!("/owner/repo{}", i), &format!("{},000", i)))
        .collect();

    Mock::given(method("GET"))
        .and(path("/trending"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page(&rows))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TrendingClient::new(&create_test_config(&mock_server.uri())).unwrap();
    let repos = client.repositories(&TrendingRequest::default()).await;

    assert_eq!(repos.len(), 25);
    assert_eq!(repos[0].repo_name, "/owner/repo1");
    assert_eq!(repos[0].description, "Description of /owner/repo1");
    assert_eq!(repos[0].stars, "1,000");
    assert_eq!(repos[0].language, "Rust");
    assert_eq!(repos[24].repo_name, "/owner/repo25");

    for repo in &repos {
        assert!(!repo.url.is_empty());
        assert_ne!(repo.url, SENTINEL);
    }

    assert_eq!(
        resolve_nth(&repos, 1).unwrap(),
        "https://github.com/owner/repo1"
    );
}

#[tokio::test]
async fn test_language_and_timespan_reach_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trending/python"))
        .and(query_param("since", "weekly"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(html_page(&[repo_row("/py/lib", "42")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TrendingClient::new(&create_test_config(&mock_server.uri())).unwrap();
    let request = TrendingRequest::new(Some("python".to_string()), Timespan::Weekly);
    let repos = client.repositories(&request).await;

    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].url, "https://github.com/py/lib");
}

#[tokio::test]
async fn test_not_found_yields_empty_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(html_page(&[repo_row("/a/b", "1")])),
        )
        .mount(&mock_server)
        .await;

    let client = TrendingClient::new(&create_test_config(&mock_server.uri())).unwrap();
    let request = TrendingRequest::default();

    assert!(client.repositories(&request).await.is_empty());
    assert!(client.developers(&request).await.is_empty());
}

#[tokio::test]
async fn test_parse_page_reports_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(&[])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&Config::default().http).unwrap();
    let timeout = Duration::from_secs(2);

    let ok = parse_page(&client, &format!("{}/ok", mock_server.uri()), timeout).await;
    assert_eq!(ok.status, Some(200));
    assert!(ok.document.is_some());

    let broken = parse_page(&client, &format!("{}/broken", mock_server.uri()), timeout).await;
    assert_eq!(broken.status, Some(500));
    assert!(broken.document.is_none());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page(&[repo_row("/a/b", "1")]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server.uri());
    config.http.timeout_secs = 1;
    let client = TrendingClient::new(&config).unwrap();

    assert!(client.repositories(&TrendingRequest::default()).await.is_empty());
}

#[tokio::test]
async fn test_developers_from_mock_page() {
    let mock_server = MockServer::start().await;

    let rows: Vec<String> = ["alice", "bob"].iter().map(|login| dev_row(login)).collect();

    Mock::given(method("GET"))
        .and(path("/trending/developers/rust"))
        .and(query_param("since", "monthly"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(&rows)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TrendingClient::new(&create_test_config(&mock_server.uri())).unwrap();
    let request = TrendingRequest::new(Some("rust".to_string()), Timespan::Monthly);
    let devs = client.developers(&request).await;

    assert_eq!(devs.len(), 2);
    assert_eq!(devs[0].dev_name, "alice");
    assert_eq!(devs[0].repo_name, "tool");
    assert_eq!(devs[0].description, "A tool by alice");
    assert_eq!(devs[0].url, "https://github.com/alice");
    assert_eq!(devs[1].url, "https://github.com/bob");
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let mock_server = MockServer::start().await;

    let rows: Vec<String> = (1..=5)
        .map(|i| repo_row(&format!("/o/r{}", i), "9"))
        .collect();

    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(&rows)))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = TrendingClient::new(&create_test_config(&mock_server.uri())).unwrap();
    let request = TrendingRequest::default();

    let first = client.repositories(&request).await;
    let second = client.repositories(&request).await;

    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}

#[tokio::test]
async fn test_both_sections_render_one_json_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(html_page(&[repo_row("/a/b", "5")])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/trending/developers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page(&[dev_row("carol")])))
        .mount(&mock_server)
        .await;

    let client = TrendingClient::new(&create_test_config(&mock_server.uri())).unwrap();
    let sections = match plan(true, true, None) {
        Action::List(sections) => sections,
        other => panic!("expected a listing, got {:?}", other),
    };

    let listings = Listings::fetch(&client, &sections, &TrendingRequest::default()).await;
    let json = render_json(&listings).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["repositories"][0]["url"], "https://github.com/a/b");
    assert_eq!(value["developers"][0]["dev_name"], "carol");
}

#[tokio::test]
async fn test_unreachable_site_renders_empty_sections_as_one_document() {
    let config = create_test_config("http://127.0.0.1:9");
    let client = TrendingClient::new(&config).unwrap();
    let sections = match plan(true, true, None) {
        Action::List(sections) => sections,
        other => panic!("expected a listing, got {:?}", other),
    };

    let listings = Listings::fetch(&client, &sections, &TrendingRequest::default()).await;
    let value: serde_json::Value = serde_json::from_str(&render_json(&listings).unwrap()).unwrap();

    assert_eq!(value["repositories"], serde_json::json!([]));
    assert_eq!(value["developers"], serde_json::json!([]));
}
