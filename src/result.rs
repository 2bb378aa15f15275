//! Result types for extraction output.
//!
//! An [`Article`] is the readable content of one page together with the
//! [`Metadata`] describing it. Both serialize to JSON.

use serde::{Deserialize, Serialize};

/// Descriptive metadata of an article.
///
/// String fields are empty when the page offers nothing for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Resolved article title.
    pub title: String,

    /// Lead image URL (`og:image`, then `twitter:image`).
    pub image: String,

    /// Short summary: the page description, or the first paragraph of the
    /// content when the page has none.
    pub excerpt: String,

    /// Author name from the first author meta tag.
    pub author: String,

    /// Reading time for a fast reader, in minutes.
    pub min_read_time: i32,

    /// Reading time for a slow reader, in minutes.
    pub max_read_time: i32,
}

/// The readable content of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// The page URL, as parsed.
    pub url: String,

    /// Metadata about the article.
    pub meta: Metadata,

    /// Main content as plain text, paragraphs separated by blank lines.
    pub content: String,

    /// Main content as sanitized HTML.
    pub raw_content: String,
}

impl Article {
    /// Whether any main content was found.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.content.is_empty() || !self.raw_content.is_empty()
    }
}
