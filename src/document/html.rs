use std::rc::Rc;

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::document::QueryNode;

/// A parsed HTML page.
pub struct HtmlDocument {
    dom: RcDom,
}

impl HtmlDocument {
    /// Parse HTML leniently, the way a browser would.
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        Self { dom }
    }

    pub fn root(&self) -> HtmlNode {
        HtmlNode(self.dom.document.clone())
    }
}

/// A handle to one node of an [`HtmlDocument`].
#[derive(Clone)]
pub struct HtmlNode(Handle);

impl QueryNode for HtmlNode {
    fn children(&self) -> Vec<Self> {
        self.0.children.borrow().iter().cloned().map(HtmlNode).collect()
    }

    fn parent(&self) -> Option<Self> {
        // The link is a Cell, so it has to be taken out and put back.
        let weak = self.0.parent.take()?;
        let parent = weak.upgrade();
        self.0.parent.set(Some(weak));
        parent.map(HtmlNode)
    }

    fn tag_name(&self) -> Option<String> {
        match self.0.data {
            NodeData::Element { ref name, .. } => Some(name.local.to_string()),
            _ => None,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        match self.0.data {
            NodeData::Element { ref attrs, .. } => attrs.borrow().iter().any(|attr| {
                attr.name.local.as_ref() == "class"
                    && attr.value.split_whitespace().any(|c| c == class)
            }),
            _ => false,
        }
    }

    fn text(&self) -> String {
        let mut text = String::new();
        collect_text(&self.0, &mut text);
        text
    }

    fn remove(&self) {
        if let Some(weak) = self.0.parent.take() {
            if let Some(parent) = weak.upgrade() {
                parent
                    .children
                    .borrow_mut()
                    .retain(|child| !Rc::ptr_eq(child, &self.0));
            }
        }
    }
}

fn collect_text(handle: &Handle, text: &mut String) {
    match handle.data {
        NodeData::Text { ref contents } => {
            text.push_str(&contents.borrow());
        }
        NodeData::Element { .. } | NodeData::Document => {
            for child in handle.children.borrow().iter() {
                collect_text(child, text);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div class="passage-content">
          <h3><span class="text Ps-23-1">Psalm 23</span></h3>
          <p><span class="text Ps-23-2"><sup class="versenum">2&nbsp;</sup>He makes me lie down<sup class="footnote">[a]</sup>.</span></p>
        </div>
      </body></html>"#;

    #[test]
    fn test_find_all_in_document_order() {
        let doc = HtmlDocument::parse(PAGE);
        let lines = doc.root().find_all("text");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "Psalm 23");
    }

    #[test]
    fn test_has_class_matches_whole_tokens() {
        let doc = HtmlDocument::parse(PAGE);
        let line = doc.root().find_first("text").unwrap();
        assert!(line.has_class("Ps-23-1"));
        assert!(!line.has_class("Ps-23"));
    }

    #[test]
    fn test_parent_and_heading_detection() {
        let doc = HtmlDocument::parse(PAGE);
        let lines = doc.root().find_all("text");
        assert!(lines[0].parent().unwrap().is_heading());
        assert!(!lines[1].parent().unwrap().is_heading());
        // Parent lookups must not sever the link.
        assert!(lines[0].parent().is_some());
    }

    #[test]
    fn test_remove_detaches_only_that_node() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.root().remove_all("footnote"), 1);
        let line = doc.root().find_all("text").pop().unwrap();
        let marker = line.find_first("versenum").unwrap();
        marker.remove();
        assert_eq!(line.text(), "He makes me lie down.");
        assert!(line.find_first("versenum").is_none());
    }

    #[test]
    fn test_tag_name_of_text_node_is_none() {
        let doc = HtmlDocument::parse("<p>plain</p>");
        let body = doc.root().find_first("missing");
        assert!(body.is_none());
        let p = doc.root().children()[0].children()[1].children()[0].clone();
        assert_eq!(p.tag_name().as_deref(), Some("p"));
        assert_eq!(p.children()[0].tag_name(), None);
    }
}
