//! Document preparation.
//!
//! Runs before scoring: removes tags that can never be readable content,
//! unwraps presentational `<font>` wrappers, and preps nodes so that the
//! scorer sees paragraphs where the markup misused containers.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::{Patterns, DIV_TO_P_ELEMENTS, REPLACE_BRS};

/// Tags removed outright before anything else looks at the tree.
const NON_CONTENT_TAGS: &[&str] = &["script", "noscript", "style", "link"];

/// Tags removed during node prepping when they have no inner markup.
const REMOVE_IF_EMPTY: &[&str] = &[
    "div", "section", "header", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Raw-markup fix-ups applied before parsing.
///
/// Two or more consecutive `<br>` tags become a paragraph boundary:
/// `<div>foo<br>bar<br> <br><br>abc</div>` turns into
/// `<div>foo<br>bar</p><p>abc</div>`, which the parser repairs into a
/// proper `<p>`.
pub fn preprocess_html(html: &str) -> Result<String> {
    let html = REPLACE_BRS.replace_all(html, "</p><p>");
    let html = html.trim();

    if html.is_empty() {
        return Err(Error::EmptyDocument);
    }

    Ok(html.to_string())
}

/// Strip non-content tags and turn `<font>` into attribute-less `<span>`.
pub fn prepare_document(doc: &Document) {
    for tag in NON_CONTENT_TAGS {
        dom::remove(&doc.select(tag));
    }

    // Renaming in place keeps nested fonts reachable from the same selection.
    for font in doc.select("font").iter() {
        dom::rename(&font, "span");
        dom::clear_all_attributes(&font);
    }
}

/// Remove nodes that look like boilerplate and convert paragraph-like divs.
///
/// One pass in document order over every element:
/// - bylines (`rel="author"` or a byline class/id) are dropped,
/// - unlikely candidates are dropped unless rescued by the maybe-candidate
///   table or being `body`/`a`,
/// - interactive elements (`input`, `time`, `button`) are dropped,
/// - empty `div`/`section`/`header`/headings are dropped,
/// - a `div` without block-level children becomes a `p`.
pub fn prep_nodes(doc: &Document, patterns: &Patterns) {
    let root = doc.root().id;
    let elements: Vec<_> = doc.select("*").nodes().to_vec();
    let mut removed = 0usize;

    for node in elements {
        if !dom::is_attached_to(&node, root) {
            continue;
        }

        let sel = Selection::from(node);
        let Some(tag) = dom::node_tag(&node) else {
            continue;
        };
        let match_string = dom::class_and_id(&sel);

        let is_byline = sel.attr("rel").is_some_and(|rel| &*rel == "author")
            || patterns.byline.is_match(&match_string);
        if is_byline {
            dom::remove(&sel);
            removed += 1;
            continue;
        }

        if patterns.unlikely_candidates.is_match(&match_string)
            && !patterns.maybe_candidate.is_match(&match_string)
            && tag != "body"
            && tag != "a"
        {
            dom::remove(&sel);
            removed += 1;
            continue;
        }

        if patterns.unlikely_elements.is_match(&tag) {
            dom::remove(&sel);
            removed += 1;
            continue;
        }

        if REMOVE_IF_EMPTY.contains(&tag.as_str()) && dom::is_element_empty(&sel) {
            dom::remove(&sel);
            removed += 1;
            continue;
        }

        if tag == "div" && !DIV_TO_P_ELEMENTS.is_match(&dom::inner_html(&sel)) {
            dom::rename(&sel, "p");
        }
    }

    debug!(removed, "prepped document nodes");
}
