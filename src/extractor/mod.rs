use tracing::debug;

use crate::app::{BgateError, Result};
use crate::document::QueryNode;
use crate::domain::{ContentUnit, Passage};

/// Editorial annotations that are never part of verse text.
pub const NOISE_CLASSES: [&str; 2] = ["crossreference", "footnote"];
pub const PASSAGE_CLASS: &str = "passage-content";
pub const LINE_CLASS: &str = "text";
pub const CHAPTER_MARKER_CLASS: &str = "chapternum";
pub const VERSE_MARKER_CLASS: &str = "versenum";

/// What a single text line of the page turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Section { text: String },
    Chapter { label: String, text: String },
    Verse { label: String, text: String },
    Continuation { text: String },
}

impl LineClass {
    /// Expand into content units. A chapter line doubles as its first verse.
    pub fn into_units(self) -> Vec<ContentUnit> {
        match self {
            LineClass::Section { text } => vec![ContentUnit::section(text)],
            LineClass::Chapter { label, text } => {
                vec![ContentUnit::chapter(label), ContentUnit::verse("1", text)]
            }
            LineClass::Verse { label, text } => vec![ContentUnit::verse(label, text)],
            LineClass::Continuation { text } => vec![ContentUnit::continuation(text)],
        }
    }
}

/// Turns a passage page into a [`Passage`].
#[derive(Clone, Default)]
pub struct ContentExtractor;

impl ContentExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract every passage block below `root`.
    ///
    /// Noise annotations and verse markers are detached from the tree as a side
    /// effect, so the document should not be reused afterwards.
    pub fn extract<N: QueryNode>(&self, root: &N) -> Result<Passage> {
        for class in NOISE_CLASSES {
            let removed = root.remove_all(class);
            debug!(class, removed, "Removed annotations");
        }

        let units: Vec<ContentUnit> = root
            .find_all(PASSAGE_CLASS)
            .iter()
            .flat_map(|passage| passage.find_all(LINE_CLASS))
            .flat_map(|line| classify_line(&line).into_units())
            .collect();

        if units.is_empty() {
            return Err(BgateError::NoContentFound);
        }

        debug!(units = units.len(), "Extracted passage");
        Ok(Passage::new(units))
    }
}

/// Classify one text line. First match wins:
/// heading parent, chapter marker, verse marker, otherwise continuation.
pub fn classify_line<N: QueryNode>(line: &N) -> LineClass {
    if line.parent().is_some_and(|parent| parent.is_heading()) {
        return LineClass::Section {
            text: clean(&line.text()),
        };
    }

    if let Some((label, text)) = take_marker(line, CHAPTER_MARKER_CLASS) {
        return LineClass::Chapter { label, text };
    }

    if let Some((label, text)) = take_marker(line, VERSE_MARKER_CLASS) {
        return LineClass::Verse { label, text };
    }

    LineClass::Continuation {
        text: clean(&line.text()),
    }
}

/// Detach the first marker of `class` from `line` and return its label along
/// with the text that remains. A marker with no visible label opens nothing.
fn take_marker<N: QueryNode>(line: &N, class: &str) -> Option<(String, String)> {
    let marker = line.find_first(class)?;
    let label = clean(&marker.text());
    marker.remove();
    if label.is_empty() {
        return None;
    }
    Some((label, clean(&line.text())))
}

// `char::is_whitespace` covers the non-breaking spaces that trail markers.
fn clean(text: &str) -> String {
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HtmlDocument;
    use crate::domain::ContentKind;

    fn extract(html: &str) -> Result<Passage> {
        let doc = HtmlDocument::parse(html);
        ContentExtractor::new().extract(&doc.root())
    }

    const PSALM_23: &str = r#"<html><body>
      <div class="passage-content">
        <h3><span class="text Ps-23-1">Psalm 23</span></h3>
        <p class="line"><span class="text Ps-23-1"><span class="chapternum">23&nbsp;</span>The Lord is my shepherd.</span></p>
        <p class="line"><span class="text Ps-23-2"><sup class="versenum">2&nbsp;</sup>He makes me lie down.</span></p>
      </div>
    </body></html>"#;

    #[test]
    fn test_psalm_heading_chapter_and_verse() {
        let passage = extract(PSALM_23).unwrap();
        assert_eq!(
            passage.units(),
            &[
                ContentUnit::section("Psalm 23"),
                ContentUnit::chapter("23"),
                ContentUnit::verse("1", "The Lord is my shepherd."),
                ContentUnit::verse("2", "He makes me lie down."),
            ]
        );
    }

    #[test]
    fn test_chapter_is_followed_by_first_verse() {
        let passage = extract(PSALM_23).unwrap();
        let at = passage
            .iter()
            .position(|u| u.kind == ContentKind::Chapter)
            .unwrap();
        let next = &passage[at + 1];
        assert_eq!(next.kind, ContentKind::Verse);
        assert_eq!(next.label, "1");
        assert_eq!(next.text, "The Lord is my shepherd.");
    }

    #[test]
    fn test_empty_document_has_no_content() {
        assert!(matches!(extract(""), Err(BgateError::NoContentFound)));
        assert!(matches!(
            extract(r#"<div class="passage-content"></div>"#),
            Err(BgateError::NoContentFound)
        ));
    }

    #[test]
    fn test_lines_outside_passage_blocks_are_ignored() {
        let html = r#"<span class="text">Site banner</span>
            <div class="passage-content"><p><span class="text"><sup class="versenum">4 </sup>Even though</span></p></div>"#;
        let passage = extract(html).unwrap();
        assert_eq!(passage.units(), &[ContentUnit::verse("4", "Even though")]);
    }

    #[test]
    fn test_footnotes_and_crossreferences_are_stripped() {
        let html = r#"<div class="passage-content"><p><span class="text">
            <sup class="versenum">3 </sup>He restores my soul.<sup class="footnote" data-fn="a">[a]</sup><sup class="crossreference">(<a>B</a>)</sup>
            </span></p></div>"#;
        let passage = extract(html).unwrap();
        assert_eq!(passage[0], ContentUnit::verse("3", "He restores my soul."));
    }

    #[test]
    fn test_unmarked_line_continues_previous_verse() {
        let html = r#"<div class="passage-content">
            <p class="line"><span class="text"><sup class="versenum">2 </sup>He makes me lie down in green pastures.</span><br>
            <span class="text">He leads me beside still waters.</span></p>
          </div>"#;
        let passage = extract(html).unwrap();
        assert_eq!(passage.len(), 2);
        assert_eq!(passage[1].kind, ContentKind::VerseContinuation);
        assert!(passage[1].label.is_empty());
        assert_eq!(passage[1].text, "He leads me beside still waters.");
    }

    #[test]
    fn test_marker_removal_keeps_numerals_in_prose() {
        let html = r#"<div class="passage-content"><p><span class="text"><sup class="versenum">12 </sup>and 12 tribes</span></p></div>"#;
        let passage = extract(html).unwrap();
        assert_eq!(passage[0], ContentUnit::verse("12", "and 12 tribes"));
    }

    #[test]
    fn test_heading_wins_over_markers() {
        let html = r#"<div class="passage-content"><h4><span class="text"><sup class="versenum">1 </sup>Title</span></h4></div>"#;
        let passage = extract(html).unwrap();
        assert_eq!(passage[0].kind, ContentKind::Section);
    }

    #[test]
    fn test_chapter_marker_wins_over_verse_marker() {
        let html = r#"<div class="passage-content"><p><span class="text"><span class="chapternum">5 </span><sup class="versenum">1 </sup>In the beginning</span></p></div>"#;
        let passage = extract(html).unwrap();
        assert_eq!(passage[0], ContentUnit::chapter("5"));
        assert_eq!(passage[1].label, "1");
    }

    #[test]
    fn test_blank_marker_does_not_open_a_verse() {
        let html = r#"<div class="passage-content"><p><span class="text"><sup class="versenum">&nbsp;</sup>orphan text</span></p></div>"#;
        let passage = extract(html).unwrap();
        assert_eq!(passage[0], ContentUnit::continuation("orphan text"));
    }

    #[test]
    fn test_multiple_passage_blocks_keep_document_order() {
        let html = r#"
            <div class="passage-content"><p><span class="text"><sup class="versenum">1 </sup>first</span></p></div>
            <div class="passage-content"><p><span class="text"><sup class="versenum">9 </sup>second</span></p></div>"#;
        let passage = extract(html).unwrap();
        let labels: Vec<&str> = passage.iter().map(|u| u.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "9"]);
    }

    #[test]
    fn test_verse_labels_never_empty() {
        let passage = extract(PSALM_23).unwrap();
        for unit in passage.iter() {
            match unit.kind {
                ContentKind::Verse | ContentKind::Chapter => assert!(!unit.label.is_empty()),
                ContentKind::VerseContinuation | ContentKind::Section => {
                    assert!(unit.label.is_empty())
                }
            }
        }
    }
}
