//! Crawler module for web page fetching and searching
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetcher` trait
//! - HTML link and text extraction behind the `Extractor` trait
//! - The search-string match rule
//! - The depth-first crawl engine with its skip limit

mod engine;
mod fetcher;
mod matcher;
mod parser;

pub use engine::{Crawler, SearchOutcome, SkipLimitReached};
pub use fetcher::{build_http_client, FetchResponse, Fetcher, HttpFetcher};
pub use matcher::contains_search_string;
pub use parser::{extract_links, extract_text, Extractor, HtmlExtractor};

use crate::config::Config;
use crate::output::CrawlReport;
use crate::SeekError;
use std::future::Future;

/// Runs a complete crawl over HTTP
///
/// This is the main entry point for a crawl that is not interrupted from outside:
/// it builds the HTTP fetcher, walks the links from the base URL and returns the report.
///
/// # Example
///
/// ```no_run
/// use sumi_seek::config::{resolve_config, FileConfig, Overrides};
/// use sumi_seek::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = resolve_config("https://example.com/", "needle", FileConfig::default(), Overrides::default())?;
/// let report = crawl(&config).await?;
/// println!("{:?}", report.found_links);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config) -> Result<CrawlReport, SeekError> {
    crawl_until(config, std::future::pending::<()>()).await
}

/// Runs a complete crawl over HTTP that ends early once `shutdown` completes
///
/// However the run ends, exactly one report is produced. An interrupted run keeps
/// every match recorded before the interrupt.
///
/// # Example
///
/// ```no_run
/// use sumi_seek::config::{resolve_config, FileConfig, Overrides};
/// use sumi_seek::crawler::crawl_until;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = resolve_config("https://example.com/", "needle", FileConfig::default(), Overrides::default())?;
/// let report = crawl_until(&config, async {
///     let _ = tokio::signal::ctrl_c().await;
/// })
/// .await?;
/// println!("{}", report.termination);
/// # Ok(())
/// # }
/// ```
pub async fn crawl_until<S>(config: &Config, shutdown: S) -> Result<CrawlReport, SeekError>
where
    S: Future<Output = ()>,
{
    let mut crawler = build_crawler(config)?;
    let start_url = config.crawl.base_url.to_string();
    let termination = crawler.run_until(&start_url, shutdown).await;
    Ok(crawler.finish(termination))
}

/// Builds a crawler that fetches over HTTP and parses HTML
pub fn build_crawler(config: &Config) -> Result<Crawler<HttpFetcher, HtmlExtractor>, SeekError> {
    let fetcher = HttpFetcher::new(&config.http)?;
    Ok(Crawler::new(
        config.crawl.clone(),
        fetcher,
        HtmlExtractor::new(),
    ))
}
