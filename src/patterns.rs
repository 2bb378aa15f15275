//! Compiled regex patterns used by the extraction heuristics.
//!
//! All patterns are compiled once at first use via `LazyLock`. The vocabulary
//! that decides what looks like content and what looks like boilerplate is
//! bundled in [`Patterns`], which callers can override through
//! [`Options::patterns`](crate::Options).

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Class/id Vocabulary
// =============================================================================

/// Class/id names of elements that are almost never article content.
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)banner|breadcrumbs|combx|comment|community|cover-wrap|disqus|extra|foot|header|legends|menu|related|remark|replies|rss|shoutbox|sidebar|skyscraper|social|sponsor|supplemental|ad-break|agegate|pagination|pager|popup|yom-remote",
    )
    .expect("UNLIKELY_CANDIDATES regex")
});

/// Class/id names that rescue an element matched by [`UNLIKELY_CANDIDATES`].
pub static MAYBE_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)and|article|body|column|main|shadow").expect("MAYBE_CANDIDATE regex")
});

/// Class/id names that add weight to an element.
pub static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)article|body|content|entry|hentry|h-entry|main|page|pagination|post|text|blog|story",
    )
    .expect("POSITIVE regex")
});

/// Class/id names that subtract weight from an element.
pub static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)hidden|^hid$| hid$| hid |^hid |banner|combx|comment|com-|contact|foot|footer|footnote|masthead|media|meta|outbrain|promo|related|scroll|share|shoutbox|sidebar|skyscraper|sponsor|shopping|tags|tool|widget",
    )
    .expect("NEGATIVE regex")
});

/// Class/id names of bylines, which are dropped from the body.
pub static BYLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)byline|author|dateline|writtenby|p-author").expect("BYLINE regex")
});

/// Video hosts whose embeds are kept during sanitizing.
pub static VIDEOS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)//(www\.)?(dailymotion|youtube|youtube-nocookie|player\.vimeo)\.com")
        .expect("VIDEOS regex")
});

/// Tag names of interactive elements removed before scoring.
pub static UNLIKELY_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(input|time|button)").expect("UNLIKELY_ELEMENTS regex")
});

// =============================================================================
// Markup Patterns
// =============================================================================

/// Inner markup that marks a `div` as a block container rather than a paragraph.
pub static DIV_TO_P_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(a|blockquote|dl|div|img|ol|p|pre|table|ul|select)")
        .expect("DIV_TO_P_ELEMENTS regex")
});

/// Two or more `<br>` tags in a row, whitespace between them ignored.
pub static REPLACE_BRS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(<br[^>]*>[ \n\r\t]*){2,}").expect("REPLACE_BRS regex")
});

/// Any run of `<br>` tags, including `&nbsp;` padding between them.
pub static KILL_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(<br\s*/?>(\s|&nbsp;?)*)+").expect("KILL_BREAKS regex")
});

/// HTML comments.
pub static COMMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->").expect("COMMENTS regex")
});

/// Runs of two or more whitespace characters.
pub static SPACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\s{2,}").expect("SPACES regex")
});

/// The heuristic vocabulary consulted by preparation, weighting and sanitizing.
///
/// `Patterns::default()` holds the built-in tables. Fields are public so a
/// caller can swap one table without touching the rest:
///
/// ```rust
/// use regex::Regex;
/// use rs_readability::{Options, Patterns};
///
/// let patterns = Patterns {
///     negative: Regex::new(r"(?i)sidebar|footer|newsletter").unwrap(),
///     ..Patterns::default()
/// };
/// let options = Options { patterns, ..Options::default() };
/// assert!(options.patterns.negative.is_match("newsletter-box"));
/// ```
#[derive(Debug, Clone)]
pub struct Patterns {
    /// Class/id names removed before scoring (see [`UNLIKELY_CANDIDATES`]).
    pub unlikely_candidates: Regex,
    /// Class/id names that veto `unlikely_candidates`.
    pub maybe_candidate: Regex,
    /// Class/id names worth +25.
    pub positive: Regex,
    /// Class/id names worth -25.
    pub negative: Regex,
    /// Class/id names of bylines.
    pub byline: Regex,
    /// Video hosts whose embeds survive sanitizing.
    pub videos: Regex,
    /// Tag names removed before scoring.
    pub unlikely_elements: Regex,
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            unlikely_candidates: UNLIKELY_CANDIDATES.clone(),
            maybe_candidate: MAYBE_CANDIDATE.clone(),
            positive: POSITIVE.clone(),
            negative: NEGATIVE.clone(),
            byline: BYLINE.clone(),
            videos: VIDEOS.clone(),
            unlikely_elements: UNLIKELY_ELEMENTS.clone(),
        }
    }
}
