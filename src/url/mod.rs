//! URL handling module for Sumi-Seek
//!
//! This module provides base URL parsing, link resolution and the same-domain test
//! that scopes a crawl.

mod domain;

use crate::{UrlError, UrlResult};
use url::Url;

// Re-export main functions
pub use domain::{extract_domain, is_same_domain, network_location};

/// Parses the base URL of a crawl
///
/// The base URL is both the traversal root and the anchor for domain scoping, so it
/// must be an absolute http(s) URL with a host.
///
/// # Examples
///
/// ```
/// use sumi_seek::url::parse_base_url;
///
/// assert!(parse_base_url("https://example.com/docs/").is_ok());
/// assert!(parse_base_url("/relative/path").is_err());
/// assert!(parse_base_url("mailto:someone@example.com").is_err());
/// ```
pub fn parse_base_url(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::Parse(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost(url_str.to_string()));
    }

    Ok(url)
}

/// Resolves an href against the URL of the page it was found on
///
/// Every href the URL parser can join is kept, whatever its scheme: `mailto:` and
/// `javascript:` links come back unchanged and fail the domain test later, fragment
/// links come back as distinct page URLs. Whitespace around the href is ignored.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_seek::url::resolve_link;
///
/// let page = Url::parse("https://example.com/docs/intro").unwrap();
/// assert_eq!(resolve_link("setup", &page), Some("https://example.com/docs/setup".to_string()));
/// assert_eq!(resolve_link("/about", &page), Some("https://example.com/about".to_string()));
/// ```
pub fn resolve_link(href: &str, page_url: &Url) -> Option<String> {
    page_url.join(href.trim()).ok().map(String::from)
}
