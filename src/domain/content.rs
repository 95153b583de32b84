use std::ops::Deref;

/// The role a [`ContentUnit`] plays in the passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Book or psalm heading.
    Section,
    /// Start of a chapter. Always followed by verse 1.
    Chapter,
    /// Start of a numbered verse.
    Verse,
    /// Further text of the verse most recently opened.
    VerseContinuation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUnit {
    pub kind: ContentKind,
    pub label: String,
    pub text: String,
}

impl ContentUnit {
    pub fn section(text: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Section,
            label: String::new(),
            text: text.into(),
        }
    }

    pub fn chapter(label: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Chapter,
            label: label.into(),
            text: String::new(),
        }
    }

    pub fn verse(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Verse,
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn continuation(text: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::VerseContinuation,
            label: String::new(),
            text: text.into(),
        }
    }
}

/// An extracted passage in reading order.
///
/// Only the extractor builds one; afterwards it is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    units: Vec<ContentUnit>,
}

impl Passage {
    pub(crate) fn new(units: Vec<ContentUnit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[ContentUnit] {
        &self.units
    }

    /// Number of verses, counting the synthesized first verse of each chapter.
    pub fn verse_count(&self) -> usize {
        self.units
            .iter()
            .filter(|u| u.kind == ContentKind::Verse)
            .count()
    }
}

impl Deref for Passage {
    type Target = [ContentUnit];

    fn deref(&self) -> &Self::Target {
        &self.units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_leave_label_empty_where_unlabeled() {
        assert!(ContentUnit::section("Psalm 23").label.is_empty());
        assert!(ContentUnit::continuation("and more").label.is_empty());
        assert!(ContentUnit::chapter("23").text.is_empty());
    }

    #[test]
    fn test_verse_count_includes_chapter_openers() {
        let passage = Passage::new(vec![
            ContentUnit::section("Psalm 23"),
            ContentUnit::chapter("23"),
            ContentUnit::verse("1", "The Lord is my shepherd."),
            ContentUnit::verse("2", "He makes me lie down."),
            ContentUnit::continuation("in green pastures."),
        ]);
        assert_eq!(passage.verse_count(), 2);
        assert_eq!(passage.len(), 5);
    }
}
