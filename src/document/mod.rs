//! Queryable document trees.
//!
//! Extraction only needs a handful of capabilities from a parsed page, so it is
//! written against [`QueryNode`] rather than a concrete parser. [`html`] adapts
//! html5ever's reference-counted DOM to it.

pub mod html;

pub use html::{HtmlDocument, HtmlNode};

/// A node in a mutable document tree.
///
/// Handles are cheap clones that refer to the same underlying node, so removing
/// a node through one handle is visible through every other.
pub trait QueryNode: Clone + Sized {
    /// Child nodes in document order.
    fn children(&self) -> Vec<Self>;

    /// The node this one is attached to, if any.
    fn parent(&self) -> Option<Self>;

    /// Lowercase element name, or `None` for text and other non-element nodes.
    fn tag_name(&self) -> Option<String>;

    /// Whether the node's `class` attribute lists `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Concatenated text of this node and all of its descendants.
    fn text(&self) -> String;

    /// Detach this node (and its subtree) from its parent.
    fn remove(&self);

    /// All descendants carrying `class`, in document order.
    fn find_all(&self, class: &str) -> Vec<Self> {
        let mut found = Vec::new();
        collect_by_class(self, class, &mut found);
        found
    }

    /// The first descendant carrying `class`, in document order.
    fn find_first(&self, class: &str) -> Option<Self> {
        self.children().into_iter().find_map(|child| {
            if child.has_class(class) {
                Some(child)
            } else {
                child.find_first(class)
            }
        })
    }

    /// Remove every descendant carrying `class`. Returns how many were removed.
    fn remove_all(&self, class: &str) -> usize {
        let found = self.find_all(class);
        for node in &found {
            node.remove();
        }
        found.len()
    }

    /// Whether this is a heading element (`h1` through `h6`).
    fn is_heading(&self) -> bool {
        self.tag_name().is_some_and(|name| {
            let mut chars = name.chars();
            chars.next() == Some('h')
                && matches!(chars.next(), Some('1'..='6'))
                && chars.next().is_none()
        })
    }
}

fn collect_by_class<N: QueryNode>(node: &N, class: &str, found: &mut Vec<N>) {
    for child in node.children() {
        if child.has_class(class) {
            found.push(child.clone());
        }
        collect_by_class(&child, class, found);
    }
}
