//! Text normalization shared by every stage.
//!
//! Lengths are always counted in Unicode scalar values, never bytes, so that
//! multi-byte scripts score the same as ASCII.

use std::borrow::Cow;

/// Collapse whitespace runs to a single space and trim both ends.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Character (code point) length of a string.
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Count ASCII and full-width commas.
#[must_use]
pub fn count_commas(text: &str) -> usize {
    text.chars().filter(|c| matches!(c, ',' | '，')).count()
}

/// Count whitespace-separated words.
#[inline]
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Decode HTML character references (`&amp;`, `&#8217;`, `&nbsp;`, ...).
#[must_use]
pub fn unescape_html(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}
