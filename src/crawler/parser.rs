//! HTML parser for extracting links and visible text
//!
//! This module handles parsing HTML content to extract:
//! - Anchor links, resolved against the page they were found on
//! - The visible text searched for the target string

use crate::url::resolve_link;
use scraper::{Html, Selector};
use url::Url;

/// Elements whose text content is never shown to a reader
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Turns a page body into links and searchable text
///
/// Both operations are total: malformed markup gives partial or empty results.
pub trait Extractor: Send + Sync {
    /// Every `<a href>` on the page, in document order, as absolute URLs
    fn links(&self, html: &str, page_url: &Url) -> Vec<String>;

    /// The page's visible text
    fn text(&self, html: &str) -> String;
}

/// `Extractor` built on the scraper crate
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for HtmlExtractor {
    fn links(&self, html: &str, page_url: &Url) -> Vec<String> {
        extract_links(html, page_url)
    }

    fn text(&self, html: &str) -> String {
        extract_text(html)
    }
}

/// Extracts all anchor links from an HTML document
///
/// # Link Extraction Rules
///
/// - Only `<a>` elements with an `href` attribute are considered
/// - Relative hrefs resolve against `page_url`, not the crawl root
/// - Duplicates are kept; the crawler's visited set deals with them
/// - Schemes are not filtered: `mailto:` and friends come back as written
/// - hrefs the URL parser cannot join are dropped
///
/// # Example
///
/// ```
/// use sumi_seek::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// let page_url = Url::parse("https://example.com/docs/").unwrap();
/// assert_eq!(extract_links(html, &page_url), vec!["https://example.com/page"]);
/// ```
pub fn extract_links(html: &str, page_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, page_url))
        .collect()
}

/// Extracts the visible text of an HTML document
///
/// Text nodes are concatenated in document order, skipping the contents of
/// script, style, noscript and template elements.
///
/// # Example
///
/// ```
/// use sumi_seek::crawler::extract_text;
///
/// let html = "<html><head><script>var x = 1;</script></head><body><p>Hello</p> world</body></html>";
/// assert_eq!(extract_text(html), "Hello world");
/// ```
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();

    for node in document.root_element().descendants() {
        let Some(chunk) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });

        if !hidden {
            text.push_str(chunk);
        }
    }

    text
}
