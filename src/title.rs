//! Title resolution.
//!
//! Page `<title>` text usually carries the site name as well
//! (`"Story headline | Site"`, `"Site: Story headline"`). The resolver strips
//! it where that can be done safely and falls back to the original title or
//! the first `<h1>` otherwise.

use dom_query::Document;

use crate::text::{char_len, normalize_text, word_count};

/// Separator tokens between the headline and the site name.
const SEPARATORS: &[&str] = &["|", "-", "\\", "/", ">", "»"];

/// Separators that denote a path-like hierarchy rather than a site suffix.
const HIERARCHICAL_SEPARATORS: &[&str] = &["\\", "/", ">", "»"];

/// Titles outside this character range are replaced by the first `<h1>`.
const MIN_TITLE_LENGTH: usize = 15;
const MAX_TITLE_LENGTH: usize = 150;

/// Resolved titles this short are only kept after a hierarchical split.
const MAX_SHORT_TITLE_WORDS: usize = 4;

fn is_separator(token: &str) -> bool {
    SEPARATORS.contains(&token)
}

/// Resolve the article title from `<title>` and the page headings.
///
/// Returns an empty string when the page has no usable title.
#[must_use]
pub fn resolve_title(doc: &Document) -> String {
    let original = normalize_text(&doc.select("title").first().text());
    let tokens: Vec<&str> = original.split_whitespace().collect();

    let separator_positions: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| is_separator(token))
        .map(|(i, _)| i)
        .collect();

    let mut had_hierarchical_separator = false;

    let title = if let (Some(&first), Some(&last)) =
        (separator_positions.first(), separator_positions.last())
    {
        had_hierarchical_separator = tokens
            .iter()
            .any(|token| HIERARCHICAL_SEPARATORS.contains(token));

        let left = tokens[..last].join(" ");
        if word_count(&left) < 3 {
            tokens[first + 1..].join(" ")
        } else {
            left
        }
    } else if original.contains(": ") {
        resolve_colon_title(doc, &original)
    } else {
        let length = char_len(&original);
        if length > MAX_TITLE_LENGTH || length < MIN_TITLE_LENGTH {
            first_heading(doc).unwrap_or_else(|| original.clone())
        } else {
            original.clone()
        }
    };

    let title_words = word_count(&title);
    let unseparated_words = tokens.iter().filter(|token| !is_separator(token)).count();

    if title_words <= MAX_SHORT_TITLE_WORDS
        && (!had_hierarchical_separator || title_words + 1 != unseparated_words)
    {
        return original;
    }

    title
}

/// `"Site: Headline"` handling.
///
/// A heading repeating the whole title means the colon is part of the
/// headline, so nothing is stripped.
fn resolve_colon_title(doc: &Document, original: &str) -> String {
    let in_heading = doc
        .select("h1, h2")
        .iter()
        .any(|heading| normalize_text(&heading.text()) == original);
    if in_heading {
        return original.to_string();
    }

    let (Some(first), Some(last)) = (original.find(':'), original.rfind(':')) else {
        return original.to_string();
    };

    let after_last = original[last + 1..].trim();
    if word_count(after_last) < 3 {
        return original[first + 1..].trim().to_string();
    }

    if word_count(&original[..first]) > 5 {
        return original.to_string();
    }

    after_last.to_string()
}

fn first_heading(doc: &Document) -> Option<String> {
    let h1 = doc.select("h1").first();
    if h1.is_empty() {
        return None;
    }
    Some(normalize_text(&h1.text()))
}
