//! HTML Meta Tag Extraction
//!
//! Reads author, description, lead image and social titles from `<meta>`
//! tags in a single pass. The first non-empty value seen for each key wins.

use dom_query::{Document, Selection};

use crate::dom;
use crate::url_utils::with_default_scheme;

/// Values harvested from `<meta>` tags, before priorities are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags {
    pub author: Option<String>,
    pub description: Option<String>,
    pub og_description: Option<String>,
    pub twitter_description: Option<String>,
    pub og_image: Option<String>,
    pub twitter_image: Option<String>,
    pub og_title: Option<String>,
    pub twitter_title: Option<String>,
}

impl MetaTags {
    /// `og:image`, else `twitter:image`, with protocol-relative URLs given
    /// an explicit scheme.
    #[must_use]
    pub fn image(&self) -> Option<String> {
        self.og_image
            .as_deref()
            .or(self.twitter_image.as_deref())
            .map(with_default_scheme)
    }

    /// `description`, else `og:description`, else `twitter:description`.
    #[must_use]
    pub fn excerpt(&self) -> Option<String> {
        self.description
            .clone()
            .or_else(|| self.og_description.clone())
            .or_else(|| self.twitter_description.clone())
    }

    /// `og:title`, else `twitter:title`.
    #[must_use]
    pub fn social_title(&self) -> Option<String> {
        self.og_title.clone().or_else(|| self.twitter_title.clone())
    }
}

fn fill(slot: &mut Option<String>, value: &str) {
    if slot.is_none() {
        *slot = Some(value.to_string());
    }
}

/// Examine the document's `<meta>` tags.
///
/// Author comes from the first tag whose `name` or `property` mentions
/// "author". Names are matched case-insensitively, values are trimmed, and
/// empty values are ignored.
#[must_use]
pub fn examine_meta(doc: &Document) -> MetaTags {
    let mut tags = MetaTags::default();

    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);

        let name = dom::get_attribute(&meta, "name")
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let property = dom::get_attribute(&meta, "property")
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let content = dom::get_attribute(&meta, "content").unwrap_or_default();
        let content = content.trim();

        if content.is_empty() {
            continue;
        }

        if name.contains("author") || property.contains("author") {
            fill(&mut tags.author, content);
            continue;
        }

        match name.as_str() {
            "description" => fill(&mut tags.description, content),
            "twitter:description" => fill(&mut tags.twitter_description, content),
            "twitter:image" => fill(&mut tags.twitter_image, content),
            "twitter:title" => fill(&mut tags.twitter_title, content),
            _ => {}
        }

        match property.as_str() {
            "og:description" => fill(&mut tags.og_description, content),
            "og:image" => fill(&mut tags.og_image, content),
            "og:title" => fill(&mut tags.og_title, content),
            _ => {}
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_of(head: &str) -> MetaTags {
        let doc = dom::parse(&format!("<html><head>{head}</head><body></body></html>"));
        examine_meta(&doc)
    }

    #[test]
    fn test_first_author_wins() {
        let tags = meta_of(
            r#"<meta name="author" content="First Writer">
               <meta property="article:author" content="Second Writer">"#,
        );
        assert_eq!(tags.author.as_deref(), Some("First Writer"));
    }

    #[test]
    fn test_author_via_property() {
        let tags = meta_of(r#"<meta property="article:author" content=" Jane Doe ">"#);
        assert_eq!(tags.author.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_image_priority_ignores_document_order() {
        let tags = meta_of(
            r#"<meta name="twitter:image" content="https://example.com/tw.png">
               <meta property="og:image" content="https://example.com/og.png">"#,
        );
        assert_eq!(tags.image().as_deref(), Some("https://example.com/og.png"));
    }

    #[test]
    fn test_protocol_relative_image() {
        let tags = meta_of(r#"<meta name="twitter:image" content="//cdn.example.com/a.jpg">"#);
        assert_eq!(tags.image().as_deref(), Some("http://cdn.example.com/a.jpg"));
    }

    #[test]
    fn test_excerpt_priority() {
        let tags = meta_of(
            r#"<meta name="twitter:description" content="tw">
               <meta property="og:description" content="og">"#,
        );
        assert_eq!(tags.excerpt().as_deref(), Some("og"));

        let tags = meta_of(
            r#"<meta property="og:description" content="og">
               <meta name="description" content="plain">"#,
        );
        assert_eq!(tags.excerpt().as_deref(), Some("plain"));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let tags = meta_of(
            r#"<meta property="og:title" content="  ">
               <meta property="og:title" content="Real Title">
               <meta name="author" content="">"#,
        );
        assert_eq!(tags.og_title.as_deref(), Some("Real Title"));
        assert!(tags.author.is_none());
    }

    #[test]
    fn test_social_title_falls_back_to_twitter() {
        let tags = meta_of(r#"<meta name="twitter:title" content="From Twitter">"#);
        assert_eq!(tags.social_title().as_deref(), Some("From Twitter"));
    }

    #[test]
    fn test_no_meta_tags() {
        assert_eq!(meta_of(""), MetaTags::default());
    }
}
