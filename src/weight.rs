//! Class/tag weighting.
//!
//! An element's weight combines a base score for its tag with +/-25 for
//! each of `class` and `id` that matches the positive or negative keyword
//! tables. Both deltas apply independently, so an attribute matching both
//! tables nets to zero.

use dom_query::Selection;

use crate::dom;
use crate::patterns::Patterns;

/// Weight added or subtracted per keyword-table match.
pub const CLASS_WEIGHT_STEP: f64 = 25.0;

/// Base score contributed by the tag name alone.
#[must_use]
pub fn tag_base_score(tag: &str) -> f64 {
    match tag {
        "article" => 10.0,
        "section" => 8.0,
        "div" => 5.0,
        "pre" | "blockquote" | "td" => 3.0,
        "form" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "address" => -3.0,
        "th" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => -5.0,
        _ => 0.0,
    }
}

/// Class/id weight of an element.
#[must_use]
pub fn class_weight(sel: &Selection, patterns: &Patterns) -> f64 {
    let mut weight = 0.0;

    for attr in ["class", "id"] {
        let Some(value) = sel.attr(attr) else {
            continue;
        };
        if patterns.negative.is_match(&value) {
            weight -= CLASS_WEIGHT_STEP;
        }
        if patterns.positive.is_match(&value) {
            weight += CLASS_WEIGHT_STEP;
        }
    }

    weight
}

/// Score a node starts with when it first becomes a candidate.
#[must_use]
pub fn initial_score(sel: &Selection, patterns: &Patterns) -> f64 {
    let tag = dom::tag_name(sel).unwrap_or_default();
    tag_base_score(&tag) + class_weight(sel, patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight_of(html: &str, selector: &str) -> f64 {
        let doc = dom::parse(html);
        class_weight(&doc.select(selector), &Patterns::default())
    }

    #[test]
    fn tag_table() {
        assert_eq!(tag_base_score("article"), 10.0);
        assert_eq!(tag_base_score("section"), 8.0);
        assert_eq!(tag_base_score("div"), 5.0);
        assert_eq!(tag_base_score("blockquote"), 3.0);
        assert_eq!(tag_base_score("address"), -3.0);
        assert_eq!(tag_base_score("h4"), -5.0);
        assert_eq!(tag_base_score("span"), 0.0);
    }

    #[test]
    fn positive_class_adds_weight() {
        assert_eq!(weight_of(r#"<div class="article-body">x</div>"#, "div"), 25.0);
    }

    #[test]
    fn negative_id_subtracts_weight() {
        assert_eq!(weight_of(r#"<div id="sidebar">x</div>"#, "div"), -25.0);
    }

    #[test]
    fn class_and_id_are_scored_independently() {
        assert_eq!(
            weight_of(r#"<div class="post" id="entry">x</div>"#, "div"),
            50.0
        );
    }

    #[test]
    fn both_tables_matching_cancel_out() {
        // "content" is positive, "comment" negative
        assert_eq!(weight_of(r#"<div class="comment-content">x</div>"#, "div"), 0.0);
    }

    #[test]
    fn no_attributes_weigh_nothing() {
        assert_eq!(weight_of("<div>x</div>", "div"), 0.0);
    }

    #[test]
    fn initial_score_adds_tag_and_class() {
        let doc = dom::parse(r#"<article class="story">x</article><ul class="share"><li>y</li></ul>"#);
        let patterns = Patterns::default();

        assert_eq!(initial_score(&doc.select("article"), &patterns), 35.0);
        assert_eq!(initial_score(&doc.select("ul"), &patterns), -28.0);
    }
}
