//! Article sanitizing.
//!
//! Cleans the selected content subtree in a fixed order. Earlier steps take
//! out structure (forms, embeds, headers) that the conditional cleaning of
//! tables, lists and divs would otherwise count, so the order matters.

use dom_query::{NodeId, Selection};
use tracing::debug;
use url::Url;

use crate::dom;
use crate::link_density::link_density;
use crate::patterns::Patterns;
use crate::text::{char_len, count_commas, normalize_text};
use crate::url_utils::create_absolute_url;
use crate::weight::{class_weight, CLASS_WEIGHT_STEP};

/// Presentational attributes removed from every element.
const PRESENTATIONAL_ATTRIBUTES: &[&str] = &[
    "align", "background", "bgcolor", "border", "cellpadding", "cellspacing",
    "frame", "hspace", "rules", "style", "valign", "vspace", "onclick",
    "onmouseover",
];

/// Elements allowed to keep `width`/`height`.
const ELEMENT_WITH_SIZE_ATTR: &[&str] = &["table", "th", "td", "hr", "pre"];

/// Tags that may carry a video player and are spared when it is one.
const EMBED_TAGS: &[&str] = &["object", "embed", "iframe"];

/// Elements with no inner markup that still carry content.
const MEDIA_ELEMENTS: &[&str] = &["iframe", "object", "video", "audio", "picture", "svg", "canvas"];

/// Conditional cleaning skips elements with at least this many commas.
const MIN_COMMAS_TO_KEEP: usize = 10;

/// Sanitize the content subtree in place.
pub fn prep_article(content: &Selection, base: &Url, patterns: &Patterns) {
    clean_style(content);

    clean_conditionally(content, "form", patterns);
    clean_conditionally(content, "fieldset", patterns);
    clean(content, "h1", patterns);
    clean(content, "object", patterns);
    clean(content, "embed", patterns);
    clean(content, "footer", patterns);
    clean(content, "link", patterns);

    // A lone h2/h3 is almost always the article title repeated. Headers
    // that clean_headers drops later do not count.
    for tag in ["h2", "h3"] {
        if count_kept_headers(content, tag, patterns) == 1 {
            clean(content, tag, patterns);
        }
    }

    clean(content, "iframe", patterns);
    clean(content, "input", patterns);
    clean(content, "textarea", patterns);
    clean(content, "select", patterns);
    clean(content, "button", patterns);
    clean_headers(content, patterns);

    clean_conditionally(content, "table", patterns);
    clean_conditionally(content, "ul", patterns);
    clean_conditionally(content, "div", patterns);

    fix_relative_uris(content, base);

    remove_empty_elements(content);
    strip_identifiers(content);
}

fn content_root(content: &Selection) -> Option<NodeId> {
    content.nodes().first().map(|n| n.id)
}

/// Matches of `tag` below the content root, skipping ones already removed.
fn live_matches<'a>(content: &Selection<'a>, tag: &str) -> Vec<Selection<'a>> {
    let Some(root) = content_root(content) else {
        return Vec::new();
    };
    content
        .select(tag)
        .nodes()
        .iter()
        .filter(|node| dom::is_attached_to(node, root))
        .map(|node| Selection::from(*node))
        .collect()
}

/// Remove presentational attributes below the content root.
///
/// `width`/`height` survive on table-family, `hr` and `pre` elements, and SVG
/// subtrees are left alone.
pub fn clean_style(content: &Selection) {
    for node in content.select("*").nodes() {
        if dom::has_ancestor_tag(node, "svg") {
            continue;
        }

        let sel = Selection::from(*node);
        for attr in PRESENTATIONAL_ATTRIBUTES {
            dom::remove_attribute(&sel, attr);
        }

        let tag = dom::node_tag(node).unwrap_or_default();
        if !ELEMENT_WITH_SIZE_ATTR.contains(&tag.as_str()) {
            dom::remove_attribute(&sel, "width");
            dom::remove_attribute(&sel, "height");
        }
    }
}

/// Whether an embed-like element points at a known video host.
fn is_video_embed(sel: &Selection, patterns: &Patterns) -> bool {
    let attribute_values = dom::get_all_attributes(sel)
        .into_iter()
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join(" ");

    patterns.videos.is_match(&attribute_values) || patterns.videos.is_match(&dom::inner_html(sel))
}

/// Remove every `tag` element, sparing video players among embeds.
pub fn clean(content: &Selection, tag: &str, patterns: &Patterns) {
    let is_embed = EMBED_TAGS.contains(&tag);

    for target in live_matches(content, tag) {
        if is_embed && is_video_embed(&target, patterns) {
            continue;
        }
        dom::remove(&target);
    }
}

fn count_kept_headers(content: &Selection, tag: &str, patterns: &Patterns) -> usize {
    content
        .select(tag)
        .iter()
        .filter(|header| class_weight(header, patterns) >= 0.0)
        .count()
}

/// Remove `h1`-`h3` headers whose class/id weight is negative.
pub fn clean_headers(content: &Selection, patterns: &Patterns) {
    for header in live_matches(content, "h1, h2, h3") {
        if class_weight(&header, patterns) < 0.0 {
            dom::remove(&header);
        }
    }
}

/// Counts that conditional cleaning decides on.
struct Census {
    paragraphs: usize,
    images: usize,
    list_items: i64,
    inputs: usize,
    non_video_embeds: usize,
    link_density: f64,
    content_length: usize,
}

impl Census {
    fn take(sel: &Selection, text: &str, patterns: &Patterns) -> Self {
        let non_video_embeds = sel
            .select("embed")
            .iter()
            .filter(|embed| !embed.attr("src").is_some_and(|src| patterns.videos.is_match(&src)))
            .count();

        Self {
            paragraphs: sel.select("p").length(),
            images: sel.select("img").length(),
            list_items: sel.select("li").length() as i64 - 100,
            inputs: sel.select("input").length(),
            non_video_embeds,
            link_density: link_density(sel),
            content_length: char_len(text),
        }
    }
}

/// Remove `tag` elements that look like boilerplate.
///
/// Negative class/id weight removes outright. Otherwise, unless the element
/// has at least 10 commas, it goes when any of these hold:
/// - not a list, and more than 100 list items beyond its paragraph count,
/// - several images with less than one paragraph per two images, outside a figure,
/// - more inputs than a third of its paragraphs,
/// - not a list, under 25 characters with no image or more than two, outside a figure,
/// - not a list, weight under 25 and link density over 0.2,
/// - weight 25 or more and link density over 0.5,
/// - one non-video embed and under 75 characters, or several non-video embeds.
pub fn clean_conditionally(content: &Selection, tag: &str, patterns: &Patterns) {
    let is_list = tag == "ul" || tag == "ol";
    let mut removed = 0usize;

    for node in live_matches(content, tag) {
        let weight = class_weight(&node, patterns);
        if weight < 0.0 {
            dom::remove(&node);
            removed += 1;
            continue;
        }

        let text = normalize_text(&dom::text_content(&node));
        if count_commas(&text) >= MIN_COMMAS_TO_KEEP {
            continue;
        }

        let c = Census::take(&node, &text, patterns);
        let in_figure = node
            .nodes()
            .first()
            .is_some_and(|n| dom::has_ancestor_tag(n, "figure"));
        let p = c.paragraphs as f64;
        let img = c.images as f64;

        let have_to_remove = (!is_list && c.list_items > c.paragraphs as i64)
            || (c.images > 1 && p / img < 0.5 && !in_figure)
            || (c.inputs as f64 > (p / 3.0).floor())
            || (!is_list
                && c.content_length < 25
                && (c.images == 0 || c.images > 2)
                && !in_figure)
            || (!is_list && weight < CLASS_WEIGHT_STEP && c.link_density > 0.2)
            || (weight >= CLASS_WEIGHT_STEP && c.link_density > 0.5)
            || ((c.non_video_embeds == 1 && c.content_length < 75) || c.non_video_embeds > 1);

        if have_to_remove {
            dom::remove(&node);
            removed += 1;
        }
    }

    if removed > 0 {
        debug!(tag, removed, "conditionally cleaned");
    }
}

/// Rewrite relative `img[src]` and `a[href]` to absolute URLs.
///
/// An `img` carrying its source in a `file` attribute gets it moved to
/// `src`; an `img` without any source is dropped.
pub fn fix_relative_uris(content: &Selection, base: &Url) {
    for img in content.select("img").iter() {
        if let Some(file) = dom::get_attribute(&img, "file") {
            dom::set_attribute(&img, "src", &file);
            dom::remove_attribute(&img, "file");
        }

        let src = dom::get_attribute(&img, "src").unwrap_or_default();
        if src.trim().is_empty() {
            dom::remove(&img);
            continue;
        }
        dom::set_attribute(&img, "src", &create_absolute_url(&src, base));
    }

    for link in content.select("a").iter() {
        if let Some(href) = dom::get_attribute(&link, "href") {
            dom::set_attribute(&link, "href", &create_absolute_url(&href, base));
        }
    }
}

/// Remove elements with no inner markup, children before parents.
///
/// Void and media elements carry content without inner markup and are kept.
pub fn remove_empty_elements(content: &Selection) {
    let Some(root) = content.nodes().first().copied() else {
        return;
    };

    // Reverse document order visits every child before its parent, so a
    // parent emptied by this pass is removed too.
    for node in root.descendants().into_iter().rev() {
        let Some(tag) = dom::node_tag(&node) else {
            continue;
        };
        let sel = Selection::from(node);
        if dom::is_void_element(&sel) || MEDIA_ELEMENTS.contains(&tag.as_str()) {
            continue;
        }

        if dom::is_element_empty(&sel) {
            dom::remove(&sel);
        }
    }
}

/// Drop `class` and `id` from the content root and everything below it.
pub fn strip_identifiers(content: &Selection) {
    dom::remove_attribute(content, "class");
    dom::remove_attribute(content, "id");
    for node in content.select("*").nodes() {
        let sel = Selection::from(*node);
        dom::remove_attribute(&sel, "class");
        dom::remove_attribute(&sel, "id");
    }
}
