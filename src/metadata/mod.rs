//! Metadata extraction module.
//!
//! Combines the resolved title with values from `<meta>` tags. The excerpt
//! may still be empty afterwards; the pipeline then fills it from the first
//! paragraph of the selected content.

pub mod meta_tags;

use dom_query::Document;
use tracing::debug;

use crate::result::Metadata;
use crate::title::resolve_title;

pub use meta_tags::{examine_meta, MetaTags};

/// Extract title, author, image and excerpt from a document.
///
/// The title is the resolved `<title>`, falling back to `og:title` and then
/// `twitter:title`. Reading times are left at zero.
#[must_use]
pub fn extract_metadata(doc: &Document) -> Metadata {
    let tags = examine_meta(doc);

    let mut title = resolve_title(doc);
    if title.is_empty() {
        title = tags.social_title().unwrap_or_default();
    }

    let metadata = Metadata {
        title,
        image: tags.image().unwrap_or_default(),
        excerpt: tags.excerpt().unwrap_or_default(),
        author: tags.author.unwrap_or_default(),
        ..Metadata::default()
    };

    debug!(
        title = %metadata.title,
        has_author = !metadata.author.is_empty(),
        has_image = !metadata.image.is_empty(),
        has_excerpt = !metadata.excerpt.is_empty(),
        "harvested metadata"
    );

    metadata
}
