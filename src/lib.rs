//! # rs-readability
//!
//! Extracts the readable main content of a web page together with its
//! title, author, excerpt, lead image and estimated reading time.
//!
//! Paragraphs are scored and their scores propagated to nearby ancestors;
//! the best-scoring container, discounted by its link density, is taken as
//! the article and sanitized of forms, widgets and boilerplate.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::extract_html;
//!
//! let html = r#"<html><head><title>A Walk Along the Old Canal Towpath</title></head>
//! <body><div class="post">
//! <p>The towpath runs for eleven miles, past locks, mills, and a string of quiet villages.</p>
//! <p>Most walkers start at the basin, where the old warehouses have become cafes.</p>
//! </div></body></html>"#;
//!
//! let article = extract_html(html, "https://example.com/walks/canal")?;
//! assert_eq!(article.meta.title, "A Walk Along the Old Canal Towpath");
//! assert!(article.content.contains("eleven miles"));
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! Fetching is done by [`extract`], which uses a blocking HTTP client; the
//! `extract_html*` and [`extract_bytes`] functions work on markup the caller
//! already has.

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Heuristic keyword tables.
pub mod patterns;

/// Whitespace, length and entity helpers.
pub mod text;

/// Tag and class/id weighting.
pub mod weight;

/// Link density measurement.
pub mod link_density;

/// Document preparation and node prepping.
pub mod prepare;

/// Paragraph scoring and candidate selection.
pub mod scoring;

/// Post-selection cleanup of the article subtree.
pub mod sanitize;

/// Title resolution.
pub mod title;

/// Meta tag harvesting.
pub mod metadata;

/// Reading-time estimation and language detection.
pub mod read_time;

/// Plain text and HTML rendering of the article.
pub mod serialize;

/// URL parsing and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page retrieval.
pub mod fetch;

use std::time::Duration;

pub use error::{Error, Result};
pub use fetch::{FetchedPage, Fetcher, HttpFetcher};
pub use options::{Options, DEFAULT_USER_AGENT};
pub use patterns::Patterns;
pub use read_time::{LanguageDetector, WhatlangDetector};
pub use result::{Article, Metadata};

/// Fetch `url` and extract its article, giving up after `timeout`.
///
/// # Errors
///
/// [`Error::InvalidUrl`] for a malformed or non-http(s) URL,
/// [`Error::Fetch`] / [`Error::Timeout`] / [`Error::ContentTooLarge`] when
/// retrieval fails, [`Error::EmptyDocument`] / [`Error::ParseError`] when the
/// body is not usable markup.
pub fn extract(url: &str, timeout: Duration) -> Result<Article> {
    let options = Options {
        timeout,
        ..Options::default()
    };
    extract_with_options(url, &options)
}

/// Fetch `url` with [`HttpFetcher`] configured from `options` and extract it.
///
/// # Errors
///
/// See [`extract`].
pub fn extract_with_options(url: &str, options: &Options) -> Result<Article> {
    extract_with_fetcher(url, &HttpFetcher::new(options), options)
}

/// Fetch `url` with a caller-supplied [`Fetcher`] and extract it.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rs_readability::{extract_with_fetcher, FetchedPage, Fetcher, Options, Result};
/// use url::Url;
///
/// struct Canned;
///
/// impl Fetcher for Canned {
///     fn get(&self, _url: &Url, _timeout: Duration) -> Result<FetchedPage> {
///         Ok(FetchedPage {
///             body: b"<html><head><title>Hello</title></head><body></body></html>".to_vec(),
///             content_type: Some("text/html; charset=utf-8".to_string()),
///         })
///     }
/// }
///
/// let article = extract_with_fetcher("https://example.com/", &Canned, &Options::default())?;
/// assert_eq!(article.meta.title, "Hello");
/// # Ok::<(), rs_readability::Error>(())
/// ```
///
/// # Errors
///
/// See [`extract`].
pub fn extract_with_fetcher(url: &str, fetcher: &dyn Fetcher, options: &Options) -> Result<Article> {
    let page_url = url_utils::parse_fetch_url(url)?;
    let page = fetcher.get(&page_url, options.timeout)?;
    let html = encoding::decode_body(&page.body, page.content_type.as_deref());
    extract::extract_document(&html, &page_url, options)
}

/// Extract the article from HTML the caller already has.
///
/// `url` is the page's address, used to resolve relative links and images.
///
/// # Errors
///
/// [`Error::InvalidUrl`], [`Error::EmptyDocument`] or [`Error::ParseError`].
pub fn extract_html(html: &str, url: &str) -> Result<Article> {
    extract_html_with_options(html, url, &Options::default())
}

/// [`extract_html`] with custom options.
///
/// # Errors
///
/// See [`extract_html`].
pub fn extract_html_with_options(html: &str, url: &str, options: &Options) -> Result<Article> {
    let page_url = url_utils::parse_page_url(url)?;
    extract::extract_document(html, &page_url, options)
}

/// Extract the article from raw bytes, detecting their character encoding.
///
/// `content_type` is the HTTP `Content-Type` header value, if known.
///
/// # Errors
///
/// See [`extract_html`].
pub fn extract_bytes(
    bytes: &[u8],
    content_type: Option<&str>,
    url: &str,
    options: &Options,
) -> Result<Article> {
    let page_url = url_utils::parse_page_url(url)?;
    let html = encoding::decode_body(bytes, content_type);
    extract::extract_document(&html, &page_url, options)
}
