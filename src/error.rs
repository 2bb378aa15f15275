//! Error types for rs-readability.
//!
//! This module defines the error types returned by extraction operations.

use std::time::Duration;

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page URL could not be parsed, or is not an http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The document was empty after pre-processing.
    #[error("HTML document is empty")]
    EmptyDocument,

    /// The HTTP request failed (transport error or error status).
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP request did not complete within the caller's timeout.
    #[error("Fetch timed out after {0:?}")]
    Timeout(Duration),

    /// The response body exceeded the configured size limit.
    #[error("Content too large: {0} bytes")]
    ContentTooLarge(usize),

    /// The body could not be treated as HTML markup.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// No element scored as a content candidate.
    ///
    /// The pipeline recovers from this one: the article is still returned
    /// with empty content and whatever metadata was found.
    #[error("No extractable content found")]
    NoContent,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
