//! Crawl engine - depth-first same-domain search
//!
//! The crawler fetches a page, walks its links in document order and, for every
//! link it has not seen before on the base URL's host, searches that page for the
//! target string before moving on. In recursive mode it descends into each
//! accepted link's own links first. A streak of skipped links as long as the
//! configured skip limit ends the whole run.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::matcher::contains_search_string;
use crate::crawler::parser::Extractor;
use crate::output::{CrawlReport, Termination};
use crate::state::CrawlState;
use crate::url::is_same_domain;
use crate::TransportError;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::future::Future;
use std::ops::ControlFlow;
use std::pin::Pin;
use url::Url;

/// Signal carried up the recursion when the skip limit is hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipLimitReached {
    /// The configured limit
    pub limit: u32,

    /// The link whose skip completed the streak
    pub last_skipped: String,
}

/// Result of searching a single page
#[derive(Debug)]
pub enum SearchOutcome {
    /// The page contains the search string
    Found {
        /// False if the page had already been recorded
        newly_recorded: bool,
    },

    /// The page was fetched but does not contain the search string
    NotFound,

    /// The page could not be fetched
    Failed(TransportError),
}

type Traversal<'a> = Pin<Box<dyn Future<Output = ControlFlow<SkipLimitReached>> + Send + 'a>>;

/// Depth-first, same-domain text search crawler
///
/// # Example
///
/// ```no_run
/// use sumi_seek::config::{CrawlConfig, HttpConfig};
/// use sumi_seek::crawler::{Crawler, HtmlExtractor, HttpFetcher};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CrawlConfig::new(Url::parse("https://example.com/")?, "needle").with_recursive(true);
/// let fetcher = HttpFetcher::new(&HttpConfig::default())?;
/// let mut crawler = Crawler::new(config, fetcher, HtmlExtractor::new());
///
/// let termination = crawler.run("https://example.com/").await;
/// let report = crawler.finish(termination);
/// println!("{} pages matched", report.found_count);
/// # Ok(())
/// # }
/// ```
pub struct Crawler<F, X> {
    config: CrawlConfig,
    fetcher: F,
    extractor: X,
    state: CrawlState,
    started_at: Option<DateTime<Utc>>,
}

impl<F: Fetcher, X: Extractor> Crawler<F, X> {
    pub fn new(config: CrawlConfig, fetcher: F, extractor: X) -> Self {
        Self {
            config,
            fetcher,
            extractor,
            state: CrawlState::new(),
            started_at: None,
        }
    }

    pub fn state(&self) -> &CrawlState {
        &self.state
    }

    /// Crawls from `start_url` until the link graph is exhausted or the skip limit is hit
    ///
    /// State from any previous run is discarded first. The start page is only
    /// mined for links; its own text is not searched.
    ///
    /// Dropping the returned future part way through (on an interrupt, say) leaves the
    /// state consistent: it only changes between awaits.
    pub async fn run(&mut self, start_url: &str) -> Termination {
        self.state = CrawlState::new();
        self.started_at = Some(Utc::now());

        tracing::info!(
            "Searching for '{}' from {} (recursive: {}, case-insensitive: {}, skip limit: {})",
            self.config.search_string,
            start_url,
            self.config.recursive,
            self.config.case_insensitive,
            self.config.skip_limit
        );

        match self.scrape_website(start_url).await {
            ControlFlow::Continue(()) => {
                tracing::info!(
                    "Crawl complete: {} links seen, {} matches",
                    self.state.visited_count(),
                    self.state.found_count()
                );
                Termination::Exhausted
            }
            ControlFlow::Break(reached) => {
                let notice = format!("Maximum skipped links' limit ({}) is reached!", reached.limit);
                tracing::warn!("{} at {}", notice.as_str().red(), reached.last_skipped);
                Termination::SkipLimitReached
            }
        }
    }

    /// Like [`run`](Self::run), but stops early with `Termination::Interrupted` once
    /// `shutdown` completes
    ///
    /// Matches recorded before the interrupt stay in the state for the report.
    pub async fn run_until<S>(&mut self, start_url: &str, shutdown: S) -> Termination
    where
        S: Future<Output = ()>,
    {
        tokio::select! {
            termination = self.run(start_url) => termination,
            _ = shutdown => {
                tracing::warn!("{}", "Interrupted, exiting...".yellow());
                Termination::Interrupted
            }
        }
    }

    /// Consumes the crawler and produces the report for the last run
    pub fn finish(self, termination: Termination) -> CrawlReport {
        let finished_at = Utc::now();

        CrawlReport {
            base_url: self.config.base_url.to_string(),
            search_string: self.config.search_string,
            found_count: self.state.found_count(),
            found_links: self.state.found_links().to_vec(),
            visited_count: self.state.visited_count(),
            skip_limit: self.config.skip_limit,
            termination,
            started_at: self.started_at.unwrap_or(finished_at),
            finished_at,
        }
    }

    /// Walks the links of one page
    ///
    /// A page that cannot be fetched, or answers with anything but 200, ends only
    /// this branch. The skip streak is not reset on entry: it carries
    /// over into and out of recursive descents.
    fn scrape_website<'a>(&'a mut self, url: &'a str) -> Traversal<'a> {
        Box::pin(async move {
            let response = match self.fetcher.get(url).await {
                Ok(response) if response.status == 200 => response,
                Ok(response) => {
                    tracing::warn!("Failed to fetch the page {}: {}", url, response.status);
                    return ControlFlow::Continue(());
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch the page {}: {}", url, e);
                    return ControlFlow::Continue(());
                }
            };

            let page_url = match Url::parse(url) {
                Ok(page_url) => page_url,
                Err(e) => {
                    tracing::warn!("Cannot resolve links on {}: {}", url, e);
                    return ControlFlow::Continue(());
                }
            };

            let links = self.extractor.links(&response.body, &page_url);
            tracing::debug!("Found {} links on {}", links.len(), url);

            for link in links {
                let same_domain = is_same_domain(&link, &self.config.base_url);
                let already_visited = self.state.check_and_mark_visited(&link);

                if !already_visited && same_domain {
                    tracing::info!("> Accessing {}...", link);
                    self.state.reset_skips();
                    self.find_string(&link).await;

                    if self.config.recursive {
                        if let ControlFlow::Break(reached) = self.scrape_website(&link).await {
                            return ControlFlow::Break(reached);
                        }
                    }
                } else {
                    let streak = self.state.record_skip();
                    let notice = format!("> [Skipped] {}!", link);
                    tracing::info!(
                        "{} ({}, {} in a row)",
                        notice.as_str().yellow(),
                        if already_visited { "visited" } else { "other domain" },
                        streak
                    );

                    if streak >= self.config.skip_limit {
                        return ControlFlow::Break(SkipLimitReached {
                            limit: self.config.skip_limit,
                            last_skipped: link,
                        });
                    }
                }
            }

            ControlFlow::Continue(())
        })
    }

    /// Fetches `url` and records it if its text contains the search string
    ///
    /// Fetch failures, including non-2xx statuses, are logged and returned but
    /// never touch the match state.
    pub async fn find_string(&mut self, url: &str) -> SearchOutcome {
        let response = match self.fetcher.get(url).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                let error = TransportError::Status {
                    url: url.to_string(),
                    status: response.status,
                };
                tracing::warn!("{}", format!("An error occurred: {}", error).as_str().red());
                return SearchOutcome::Failed(error);
            }
            Err(error) => {
                tracing::warn!("{}", format!("An error occurred: {}", error).as_str().red());
                return SearchOutcome::Failed(error);
            }
        };

        let text = self.extractor.text(&response.body);

        if contains_search_string(
            &self.config.search_string,
            &text,
            self.config.case_insensitive,
        ) {
            let newly_recorded = self.state.record_match(url);
            let notice = format!("'{}' found in {}", self.config.search_string, url);
            tracing::info!("{}", notice.as_str().green());
            SearchOutcome::Found { newly_recorded }
        } else {
            let notice = format!("'{}' not found in {}", self.config.search_string, url);
            tracing::info!("{}", notice.as_str().red());
            SearchOutcome::NotFound
        }
    }
}
