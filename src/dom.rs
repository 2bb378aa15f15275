//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. `dom_query` keeps every node of a
//! document in an arena addressed by [`NodeId`], so a `NodeId` is a stable
//! identity for the lifetime of one extraction even while the tree is being
//! mutated. Nodes removed from the tree stay in the arena, detached.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

/// Elements that never have children and therefore never have inner markup.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes as key-value pairs
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Clear all attributes from a selection.
pub fn clear_all_attributes(sel: &Selection) {
    for (key, _) in get_all_attributes(sel) {
        remove_attribute(sel, &key);
    }
}

/// `class` and `id` joined by a space, the string the keyword tables run on.
#[must_use]
pub fn class_and_id(sel: &Selection) -> String {
    let class = sel.attr("class").map(|s| s.to_string()).unwrap_or_default();
    let id = sel.attr("id").map(|s| s.to_string()).unwrap_or_default();
    format!("{class} {id}")
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes().first().and_then(node_tag)
}

/// Tag name of a single node (lowercase), `None` for non-elements.
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check if element is a void element (self-closing)
#[must_use]
pub fn is_void_element(sel: &Selection) -> bool {
    tag_name(sel).is_some_and(|t| VOID_ELEMENTS.contains(&t.as_str()))
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Whether the trimmed inner markup is empty.
#[must_use]
pub fn is_element_empty(sel: &Selection) -> bool {
    inner_html(sel).trim().is_empty()
}

// === Tree Navigation ===

/// Up to `max_depth` element ancestors, nearest first.
///
/// The document node above `<html>` is not an element and is never returned.
#[must_use]
pub fn element_ancestors<'a>(node: &NodeRef<'a>, max_depth: usize) -> Vec<NodeRef<'a>> {
    let mut ancestors = Vec::with_capacity(max_depth);
    let mut current = node.parent();

    while let Some(parent) = current {
        if ancestors.len() == max_depth || !parent.is_element() {
            break;
        }
        current = parent.parent();
        ancestors.push(parent);
    }

    ancestors
}

/// Whether the node itself or one of its ancestors has tag name `tag`.
#[must_use]
pub fn has_ancestor_tag(node: &NodeRef, tag: &str) -> bool {
    let mut current = Some(*node);
    while let Some(n) = current {
        if node_tag(&n).is_some_and(|t| t == tag) {
            return true;
        }
        current = n.parent();
    }
    false
}

/// Whether `node` is `root` or still hangs somewhere below it.
///
/// Nodes removed earlier in a pass stay in the arena; this tells them apart
/// from live ones.
#[must_use]
pub fn is_attached_to(node: &NodeRef, root: NodeId) -> bool {
    let mut current = Some(*node);
    while let Some(n) = current {
        if n.id == root {
            return true;
        }
        current = n.parent();
    }
    false
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Rename element tag
#[inline]
pub fn rename(sel: &Selection, new_tag: &str) {
    sel.rename(new_tag);
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_modification() {
        let doc = parse(r#"<a href="/old" class="link">text</a>"#);
        let link = doc.select("a");

        set_attribute(&link, "href", "/new");
        remove_attribute(&link, "class");

        assert_eq!(get_attribute(&link, "href"), Some("/new".to_string()));
        assert!(!has_attribute(&link, "class"));
    }

    #[test]
    fn test_get_all_attributes() {
        let doc = parse(r##"<a href="http://example.com" class="link" title="Example">Link</a>"##);
        let attrs = get_all_attributes(&doc.select("a"));

        assert_eq!(attrs.len(), 3);
        assert!(attrs.iter().any(|(k, v)| k == "href" && v == "http://example.com"));
        assert!(attrs.iter().any(|(k, v)| k == "title" && v == "Example"));
    }

    #[test]
    fn test_clear_all_attributes() {
        let doc = parse(r#"<font face="Arial" color="red">x</font>"#);
        let font = doc.select("font");

        clear_all_attributes(&font);
        assert!(get_all_attributes(&font).is_empty());
    }

    #[test]
    fn test_class_and_id() {
        let doc = parse(r#"<div class="post body" id="main">x</div><p>y</p>"#);

        assert_eq!(class_and_id(&doc.select("div")), "post body main");
        assert_eq!(class_and_id(&doc.select("p")), " ");
    }

    #[test]
    fn test_tag_name_lowercase() {
        let doc = parse(r#"<ARTICLE><Section>content</Section></ARTICLE>"#);

        assert_eq!(tag_name(&doc.select("article")), Some("article".to_string()));
        assert_eq!(tag_name(&doc.select("section")), Some("section".to_string()));
        assert_eq!(tag_name(&doc.select("aside")), None);
    }

    #[test]
    fn test_is_void_element() {
        let doc = parse(r#"<div><br><img src="x.jpg"><p>text</p></div>"#);

        assert!(is_void_element(&doc.select("br")));
        assert!(is_void_element(&doc.select("img")));
        assert!(!is_void_element(&doc.select("p")));
    }

    #[test]
    fn test_is_element_empty() {
        let doc = parse(r#"<div id="a">  </div><div id="b"><span></span></div>"#);

        assert!(is_element_empty(&doc.select("#a")));
        assert!(!is_element_empty(&doc.select("#b")));
    }

    #[test]
    fn test_element_ancestors_stop_at_depth() {
        let doc = parse(r#"<html><body><div><section><p id="t">x</p></section></div></body></html>"#);
        let p = doc.select("#t");
        let node = p.nodes()[0];

        let tags: Vec<_> = element_ancestors(&node, 3)
            .iter()
            .filter_map(node_tag)
            .collect();
        assert_eq!(tags, vec!["section", "div", "body"]);
    }

    #[test]
    fn test_element_ancestors_exclude_document_node() {
        let doc = parse(r#"<html><body><p id="t">x</p></body></html>"#);
        let html = doc.select("html");
        let node = html.nodes()[0];

        assert!(element_ancestors(&node, 3).is_empty());
    }

    #[test]
    fn test_has_ancestor_tag() {
        let doc = parse(r#"<figure><div><img id="i" src="a.png"></div></figure><div id="d"></div>"#);

        assert!(has_ancestor_tag(&doc.select("#i").nodes()[0], "figure"));
        assert!(!has_ancestor_tag(&doc.select("#d").nodes()[0], "figure"));
    }

    #[test]
    fn test_is_attached_after_removal() {
        let doc = parse(r#"<div id="outer"><p id="inner">x</p></div>"#);
        let inner = doc.select("#inner").nodes()[0];
        let root = doc.root().id;

        assert!(is_attached_to(&inner, root));
        doc.select("#outer").remove();
        assert!(!is_attached_to(&inner, root));
    }

    #[test]
    fn test_rename_element() {
        let doc = parse(r#"<div id="test">content</div>"#);
        rename(&doc.select("#test"), "p");

        assert!(doc.select("p#test").exists());
        assert!(doc.select("div#test").is_empty());
    }

    #[test]
    fn test_operations_on_empty_selection() {
        let doc = parse(r#"<div>content</div>"#);
        let empty = doc.select("span");

        remove(&empty);
        set_attribute(&empty, "class", "test");
        remove_attribute(&empty, "id");

        assert_eq!(text_content(&empty), "".into());
        assert!(inner_html(&empty).is_empty());
    }
}
