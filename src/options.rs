//! Configuration options for article extraction.
//!
//! The `Options` struct controls retrieval limits and the heuristic
//! vocabulary. There is no configuration file; callers build an `Options`
//! value in code.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::patterns::Patterns;
use crate::read_time::{LanguageDetector, WhatlangDetector};

/// Default User-Agent sent by [`HttpFetcher`](crate::fetch::HttpFetcher).
pub const DEFAULT_USER_AGENT: &str = concat!("rs-readability/", env!("CARGO_PKG_VERSION"));

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rs_readability::Options;
///
/// let options = Options {
///     timeout: Duration::from_secs(5),
///     ..Options::default()
/// };
/// assert_eq!(options.timeout, Duration::from_secs(5));
/// ```
#[derive(Clone)]
pub struct Options {
    /// Upper bound for the whole HTTP fetch.
    ///
    /// Default: `30s`
    pub timeout: Duration,

    /// User-Agent header sent with the fetch.
    ///
    /// Default: `rs-readability/<version>`
    pub user_agent: String,

    /// Largest response body accepted, in bytes.
    ///
    /// Default: `10 MiB`
    pub max_content_size: usize,

    /// Keyword tables used for weighting, preparation and sanitizing.
    pub patterns: Patterns,

    /// Language detector feeding the reading-time estimate.
    ///
    /// Default: [`WhatlangDetector`]
    pub language_detector: Arc<dyn LanguageDetector + Send + Sync>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_content_size: 10 * 1024 * 1024,
            patterns: Patterns::default(),
            language_detector: Arc::new(WhatlangDetector),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("max_content_size", &self.max_content_size)
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}
