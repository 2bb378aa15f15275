//! Page retrieval.
//!
//! The extractor only needs "GET this URL within this time". [`Fetcher`] is
//! that seam; [`HttpFetcher`] implements it with a blocking `reqwest` client,
//! and tests or callers with their own HTTP stack plug in something else.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::options::{Options, DEFAULT_USER_AGENT};

/// A fetched response body and its declared content type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

/// Retrieves raw page bytes.
pub trait Fetcher {
    /// GET `url`, failing if it takes longer than `timeout`.
    fn get(&self, url: &Url, timeout: Duration) -> Result<FetchedPage>;
}

/// [`Fetcher`] over a blocking `reqwest` client.
///
/// Non-success statuses are errors. No retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    user_agent: String,
    max_content_size: usize,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_content_size: Options::default().max_content_size,
        }
    }
}

impl HttpFetcher {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            user_agent: options.user_agent.clone(),
            max_content_size: options.max_content_size,
        }
    }

    fn classify(url: &Url, timeout: Duration, source: reqwest::Error) -> Error {
        if source.is_timeout() {
            Error::Timeout(timeout)
        } else {
            Error::Fetch {
                url: url.to_string(),
                source,
            }
        }
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &Url, timeout: Duration) -> Result<FetchedPage> {
        debug!(%url, ?timeout, "fetching page");

        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(timeout)
            .build()
            .map_err(|e| Self::classify(url, timeout, e))?;

        let response = client
            .get(url.as_str())
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Self::classify(url, timeout, e))?;

        if let Some(length) = response.content_length() {
            let length = usize::try_from(length).unwrap_or(usize::MAX);
            if length > self.max_content_size {
                return Err(Error::ContentTooLarge(length));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .map_err(|e| Self::classify(url, timeout, e))?;
        if body.len() > self.max_content_size {
            return Err(Error::ContentTooLarge(body.len()));
        }

        debug!(%url, bytes = body.len(), content_type = ?content_type, "fetched page");

        Ok(FetchedPage {
            body: body.to_vec(),
            content_type,
        })
    }
}
