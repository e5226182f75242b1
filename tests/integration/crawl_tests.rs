//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and drive the real
//! HTTP fetcher and HTML extractor through full search runs.

use sumi_seek::config::{resolve_config, CrawlConfig, FileConfig, HttpConfig, Overrides};
use std::time::Duration;
use sumi_seek::crawler::{crawl, crawl_until, Crawler, HtmlExtractor, HttpFetcher};
use sumi_seek::output::Termination;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page at `page_path`, expecting it to be requested `times` times
async fn mount_page(server: &MockServer, page_path: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts a bare status response at `page_path`
async fn mount_status(server: &MockServer, page_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Same server reached through a different host name, so it counts as another domain
fn foreign_uri(server: &MockServer) -> String {
    format!("http://localhost:{}", server.address().port())
}

fn crawler_for(base_url: &str, search: &str) -> (CrawlConfig, HttpFetcher) {
    let config = CrawlConfig::new(Url::parse(base_url).expect("valid base URL"), search);
    let fetcher = HttpFetcher::new(&HttpConfig {
        timeout_secs: 5,
        connect_timeout_secs: 2,
        ..HttpConfig::default()
    })
    .expect("Failed to build fetcher");
    (config, fetcher)
}

#[tokio::test]
async fn test_single_page_search_stays_on_domain() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());
    let foreign = foreign_uri(&mock_server);

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><body>
            <a href="/a">A</a>
            <a href="{}/foreign">Elsewhere</a>
            </body></html>"#,
            foreign
        ),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        "<html><body><p>hello world</p></body></html>".to_string(),
        1,
    )
    .await;
    mount_page(&mock_server, "/foreign", "hello".to_string(), 0).await;

    let (config, fetcher) = crawler_for(&base_url, "hello");
    let mut crawler = Crawler::new(config, fetcher, HtmlExtractor::new());

    let termination = crawler.run(&base_url).await;
    let report = crawler.finish(termination);

    assert_eq!(report.termination, Termination::Exhausted);
    assert_eq!(report.found_links, vec![format!("{}a", base_url)]);
    assert_eq!(report.found_count, 1);
    assert_eq!(report.visited_count, 2);
}

#[tokio::test]
async fn test_recursive_search_follows_nested_links() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/docs/">Docs</a><a href="/about">About</a>"#.to_string(),
        // Once as the start page, then searched and walked again via the Home link
        3,
    )
    .await;
    mount_page(
        &mock_server,
        "/docs/",
        r#"<p>index</p><a href="intro">Intro</a><a href="/">Home</a>"#.to_string(),
        2,
    )
    .await;
    mount_page(
        &mock_server,
        "/docs/intro",
        "<p>Getting started with the Needle API</p>".to_string(),
        2,
    )
    .await;
    mount_page(&mock_server, "/about", "<p>about us</p>".to_string(), 2).await;

    let (config, fetcher) = crawler_for(&base_url, "needle");
    let config = config.with_recursive(true).with_case_insensitive(true);
    let mut crawler = Crawler::new(config, fetcher, HtmlExtractor::new());

    let termination = crawler.run(&base_url).await;

    assert_eq!(termination, Termination::Exhausted);
    assert_eq!(
        crawler.state().found_links(),
        &[format!("{}docs/intro", base_url)]
    );
}

#[tokio::test]
async fn test_skip_limit_stops_run() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());
    let foreign = foreign_uri(&mock_server);

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/late">Late</a>"#.to_string(),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        format!(
            r#"<a href="/a">Self</a><a href="{}/x">X</a><a href="/a">Self</a><a href="/b">B</a>"#,
            foreign
        ),
        2,
    )
    .await;
    mount_page(&mock_server, "/b", "needle".to_string(), 0).await;
    mount_page(&mock_server, "/late", "needle".to_string(), 0).await;

    let (config, fetcher) = crawler_for(&base_url, "needle");
    let config = config.with_recursive(true).with_skip_limit(3);
    let mut crawler = Crawler::new(config, fetcher, HtmlExtractor::new());

    let termination = crawler.run(&base_url).await;
    let report = crawler.finish(termination);

    assert_eq!(report.termination, Termination::SkipLimitReached);
    assert!(report.found_links.is_empty());
    assert_eq!(report.found_count, 0);
}

#[tokio::test]
async fn test_error_pages_do_not_stop_run() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/missing">Missing</a><a href="/broken">Broken</a><a href="/ok">Ok</a>"#
            .to_string(),
        1,
    )
    .await;
    mount_status(&mock_server, "/missing", 404).await;
    mount_status(&mock_server, "/broken", 500).await;
    mount_page(&mock_server, "/ok", "<p>needle</p>".to_string(), 2).await;

    let (config, fetcher) = crawler_for(&base_url, "needle");
    let mut crawler = Crawler::new(config.with_recursive(true), fetcher, HtmlExtractor::new());

    let termination = crawler.run(&base_url).await;

    assert_eq!(termination, Termination::Exhausted);
    assert_eq!(crawler.state().found_links(), &[format!("{}ok", base_url)]);
}

#[tokio::test]
async fn test_failed_start_page_reports_nothing() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    mount_status(&mock_server, "/", 503).await;

    let config = resolve_config(
        &base_url,
        "needle",
        FileConfig::default(),
        Overrides {
            recursive: true,
            ..Overrides::default()
        },
    )
    .expect("valid config");

    let report = crawl(&config).await.expect("crawl runs");

    assert_eq!(report.termination, Termination::Exhausted);
    assert_eq!(report.visited_count, 0);
    assert!(report.found_links.is_empty());
}

#[tokio::test]
async fn test_crawl_entry_point() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/one">One</a><a href="/two">Two</a><a href="/one">One again</a>"#
            .to_string(),
        1,
    )
    .await;
    mount_page(&mock_server, "/one", "<p>Needle here</p>".to_string(), 1).await;
    mount_page(&mock_server, "/two", "<p>needle there</p>".to_string(), 1).await;

    let config = resolve_config(
        &base_url,
        "needle",
        FileConfig::default(),
        Overrides::default(),
    )
    .expect("valid config");

    let report = crawl(&config).await.expect("crawl runs");

    assert_eq!(report.termination, Termination::Exhausted);
    assert_eq!(report.found_links, vec![format!("{}two", base_url)]);
    assert_eq!(report.visited_count, 2);
}

#[tokio::test]
async fn test_interrupted_crawl_reports_matches_so_far() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/one">One</a><a href="/slow">Slow</a><a href="/two">Two</a>"#.to_string(),
        1,
    )
    .await;
    mount_page(&mock_server, "/one", "<p>needle</p>".to_string(), 1).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/two", "<p>needle</p>".to_string(), 0).await;

    let config = resolve_config(
        &base_url,
        "needle",
        FileConfig::default(),
        Overrides::default(),
    )
    .expect("valid config");

    let report = crawl_until(&config, tokio::time::sleep(Duration::from_millis(500)))
        .await
        .expect("crawl runs");

    assert_eq!(report.termination, Termination::Interrupted);
    assert_eq!(report.found_links, vec![format!("{}one", base_url)]);
    assert_eq!(report.found_count, 1);
    assert_eq!(report.visited_count, 2);
}
