use url::Url;

/// Extracts the host from a URL, lowercased
///
/// Returns None if the URL has no host, which should not happen for valid
/// HTTP(S) URLs.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use moissonneur::url::extract_host;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Checks whether a URL belongs to the crawl's host
///
/// The same-domain restriction is exact host equality: subdomains of the
/// start host are out of scope, as are all other hosts.
pub fn same_host(url: &Url, crawl_host: &str) -> bool {
    extract_host(url).as_deref() == Some(crawl_host)
}
