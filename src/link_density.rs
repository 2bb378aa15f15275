//! Link density.
//!
//! The share of an element's visible text that sits inside anchors.
//! Navigation blocks and related-link lists score close to 1; prose scores
//! close to 0.

use dom_query::Selection;

use crate::dom;
use crate::text::{char_len, normalize_text};

/// Fraction of the element's text enclosed in `<a>` descendants.
///
/// Both sides are measured on whitespace-normalized text. Returns 0 for an
/// element without text and never exceeds 1.
#[must_use]
pub fn link_density(element: &Selection) -> f64 {
    let text_length = char_len(&normalize_text(&dom::text_content(element)));
    if text_length == 0 {
        return 0.0;
    }

    let link_length: usize = element
        .select("a")
        .iter()
        .map(|link| char_len(&normalize_text(&dom::text_content(&link))))
        .sum();

    (link_length as f64 / text_length as f64).min(1.0)
}
