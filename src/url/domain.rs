use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// URLs without a host (`mailto:`, `javascript:`, `data:`) return None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_seek::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("mailto:someone@example.com").unwrap();
/// assert_eq!(extract_domain(&url), None);
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns the network location of a URL: lowercase host plus the explicit port, if any
///
/// Credentials are not part of the location. A default port written out explicitly
/// (`http://example.com:80/`) is dropped by the URL parser, so it compares equal
/// to the bare host.
pub fn network_location(url: &Url) -> Option<String> {
    let host = extract_domain(url)?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    })
}

/// Checks whether `link` lives on the same network location as `base`
///
/// Links that are not parseable URLs, or have no host at all, never match.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_seek::url::is_same_domain;
///
/// let base = Url::parse("http://x.test/").unwrap();
/// assert!(is_same_domain("http://x.test/a", &base));
/// assert!(!is_same_domain("http://other.test/b", &base));
/// assert!(!is_same_domain("http://x.test:8080/a", &base));
/// ```
pub fn is_same_domain(link: &str, base: &Url) -> bool {
    let Ok(link) = Url::parse(link) else {
        return false;
    };

    match (network_location(&link), network_location(base)) {
        (Some(link_location), Some(base_location)) => link_location == base_location,
        _ => false,
    }
}
