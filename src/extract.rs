//! The extraction pipeline.
//!
//! Pre-process the markup, parse it, strip non-content tags, harvest
//! metadata, prep nodes, pick the top candidate, sanitize it, and serialize
//! it. A page without a content candidate still yields an [`Article`] with
//! its metadata.

use tracing::{debug, warn};
use url::Url;

use crate::dom::{self, Selection};
use crate::error::{Error, Result};
use crate::metadata;
use crate::options::Options;
use crate::prepare;
use crate::read_time::content_read_time;
use crate::result::Article;
use crate::sanitize;
use crate::scoring;
use crate::serialize;
use crate::text::normalize_text;

/// Run the pipeline over decoded HTML belonging to `url`.
pub(crate) fn extract_document(html: &str, url: &Url, options: &Options) -> Result<Article> {
    let html = prepare::preprocess_html(html)?;
    if html.contains('\0') {
        return Err(Error::ParseError("document contains NUL bytes".to_string()));
    }

    debug!(%url, bytes = html.len(), "parsing document");
    let doc = dom::parse(&html);

    prepare::prepare_document(&doc);
    let mut meta = metadata::extract_metadata(&doc);
    prepare::prep_nodes(&doc, &options.patterns);

    let content: Option<Selection> = match scoring::find_top_candidate(&doc, &options.patterns) {
        Ok(top) => Some(top.selection()),
        Err(Error::NoContent) => {
            warn!(%url, "no content candidate found");
            None
        }
        Err(e) => return Err(e),
    };

    let mut article = Article {
        url: url.to_string(),
        ..Article::default()
    };

    if let Some(content) = content {
        sanitize::prep_article(&content, url, &options.patterns);

        if meta.excerpt.is_empty() {
            meta.excerpt = normalize_text(&content.select("p").first().text());
        }

        let (min, max) = content_read_time(&content, options.language_detector.as_ref());
        meta.min_read_time = min;
        meta.max_read_time = max;

        article.content = serialize::text_content(&content);
        article.raw_content = serialize::html_content(&content);
    }

    debug!(
        %url,
        chars = article.content.chars().count(),
        min_read_time = meta.min_read_time,
        max_read_time = meta.max_read_time,
        "extraction finished"
    );

    article.meta = meta;
    Ok(article)
}
