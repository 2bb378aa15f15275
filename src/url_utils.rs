//! URL Utility Functions
//!
//! Parsing of the page URL and resolution of the relative links and image
//! sources found in extracted content.

use url::Url;

use crate::error::{Error, Result};

/// Parse the page URL. Only absolute URLs are accepted.
pub fn parse_page_url(url_str: &str) -> Result<Url> {
    Url::parse(url_str.trim()).map_err(|e| Error::InvalidUrl(format!("{url_str}: {e}")))
}

/// Like [`parse_page_url`], additionally requiring an http(s) scheme.
pub fn parse_fetch_url(url_str: &str) -> Result<Url> {
    let url = parse_page_url(url_str)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidUrl(format!(
            "{url_str}: unsupported scheme {scheme:?}"
        ))),
    }
}

/// Check if a string is an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Resolve a link or image reference against the page URL.
///
/// Absolute URLs, fragment-only references and non-navigational schemes
/// (`data:`, `javascript:`, `mailto:`, `tel:`) are returned unchanged.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() || url_str.starts_with('#') {
        return url_str.to_string();
    }

    if url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    if is_absolute_url(url_str) {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Give a protocol-relative URL (`//host/path`) an explicit `http:` scheme.
#[must_use]
pub fn with_default_scheme(url_str: &str) -> String {
    if url_str.starts_with("//") {
        format!("http:{url_str}")
    } else {
        url_str.to_string()
    }
}
