//! Rendering the selected content to plain text and to cleaned HTML.

use dom_query::{NodeRef, Selection};

use crate::dom;
use crate::patterns::{COMMENTS, KILL_BREAKS, SPACES};
use crate::text::{normalize_text, unescape_html};

/// Plain text of the content subtree.
///
/// Any element whose parent is not a `<p>` starts a new paragraph. Only
/// direct children of a `<p>` flow with the surrounding text; deeper inline
/// markup (`<p>a <span><b>b</b></span></p>`) breaks the paragraph at the
/// nested element.
#[must_use]
pub fn text_content(content: &Selection) -> String {
    let Some(root) = content.nodes().first() else {
        return String::new();
    };

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    walk(root, &mut paragraphs, &mut current);
    paragraphs.push(current);

    paragraphs
        .iter()
        .map(|p| normalize_text(p))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn walk(node: &NodeRef, paragraphs: &mut Vec<String>, current: &mut String) {
    if node.is_text() {
        current.push_str(&node.text());
    } else if node.is_element() {
        let inside_paragraph = node
            .parent()
            .and_then(|parent| dom::node_tag(&parent))
            .is_some_and(|tag| tag == "p");
        if !inside_paragraph {
            paragraphs.push(std::mem::take(current));
        }
    }

    for child in node.children() {
        walk(&child, paragraphs, current);
    }
}

/// Cleaned inner markup of the content subtree.
///
/// Entities are unescaped, comments stripped, runs of `<br>` collapsed to a
/// single `<br />`, and whitespace runs collapsed to one space.
#[must_use]
pub fn html_content(content: &Selection) -> String {
    let html = dom::inner_html(content);
    let html = unescape_html(&html);
    let html = COMMENTS.replace_all(&html, "");
    let html = KILL_BREAKS.replace_all(&html, "<br />");
    let html = SPACES.replace_all(&html, " ");
    html.into_owned()
}
