//! Word wrapping of a passage into display rows.
//!
//! [`layout`] is a pure function of its inputs; the viewer relies on that to
//! rebuild the row buffer on every resize.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{BgateError, Result};
use crate::domain::{ContentKind, ContentUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Blank,
    Body,
    Section,
    Chapter,
}

/// One output row, without the outer padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String,
    pub style: LineStyle,
}

impl DisplayLine {
    fn blank() -> Self {
        Self {
            text: String::new(),
            style: LineStyle::Blank,
        }
    }

    fn styled(text: String, style: LineStyle) -> Self {
        Self { text, style }
    }

    /// Width in terminal columns.
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// Columns left for text once `padding` is taken from both sides of `width`.
pub fn effective_width(width: usize, padding: usize) -> Result<usize> {
    width
        .checked_sub(padding.saturating_mul(2))
        .filter(|&columns| columns > 0)
        .ok_or(BgateError::InvalidLayout { width, padding })
}

/// Lay out `units` for a terminal `width` columns wide.
pub fn layout(units: &[ContentUnit], width: usize, padding: usize) -> Result<Vec<DisplayLine>> {
    let columns = effective_width(width, padding)?;
    let mut lines = Vec::new();
    // Text column of the verse currently open, for continuation rows.
    let mut hang = 0;

    for unit in units {
        match unit.kind {
            ContentKind::Section => {
                push_blank(&mut lines);
                for row in wrap(&unit.text, columns, 0, 0) {
                    lines.push(DisplayLine::styled(
                        center(&row, columns),
                        LineStyle::Section,
                    ));
                }
                push_blank(&mut lines);
            }
            ContentKind::Chapter => {
                push_blank(&mut lines);
                for row in wrap(&unit.label, columns, 0, 0) {
                    lines.push(DisplayLine::styled(row, LineStyle::Chapter));
                }
            }
            ContentKind::Verse => {
                hang = clamp_indent(unit.label.width() + 1, columns);
                let verse = format!("{} {}", unit.label, unit.text);
                for row in wrap(&verse, columns, 0, hang) {
                    lines.push(DisplayLine::styled(row, LineStyle::Body));
                }
            }
            ContentKind::VerseContinuation => {
                for row in wrap(&unit.text, columns, hang, hang) {
                    lines.push(DisplayLine::styled(row, LineStyle::Body));
                }
            }
        }
    }

    Ok(lines)
}

// Blank rows never lead the buffer and never stack.
fn push_blank(lines: &mut Vec<DisplayLine>) {
    if lines.last().is_some_and(|line| line.style != LineStyle::Blank) {
        lines.push(DisplayLine::blank());
    }
}

fn clamp_indent(indent: usize, columns: usize) -> usize {
    indent.min(columns.saturating_sub(1))
}

fn center(row: &str, columns: usize) -> String {
    let pad = columns.saturating_sub(row.width()) / 2;
    format!("{}{}", " ".repeat(pad), row)
}

/// Greedy word wrap into rows of at most `columns` columns.
///
/// The first row starts `first_indent` columns in, every later row `hang`
/// columns in. Words are joined by single spaces and only split when a word
/// alone does not fit on an otherwise empty row. A row drops its indent if a
/// wide character would not fit after it.
fn wrap(text: &str, columns: usize, first_indent: usize, hang: usize) -> Vec<String> {
    let first_indent = clamp_indent(first_indent, columns);
    let hang = clamp_indent(hang, columns);

    let mut rows = Vec::new();
    let mut row = " ".repeat(first_indent);
    let mut used = first_indent;
    let mut empty = true;
    let mut pending: Vec<&str> = text.split_whitespace().rev().collect();

    while let Some(word) = pending.pop() {
        let word_width = word.width();
        let gap = if empty { 0 } else { 1 };

        if used + gap + word_width <= columns {
            if !empty {
                row.push(' ');
            }
            row.push_str(word);
            used += gap + word_width;
            empty = false;
            continue;
        }

        if empty {
            // Give up the indent when not even one character fits beside it.
            let first = word.chars().next().and_then(|c| c.width()).unwrap_or(0);
            if first > columns - used {
                row.clear();
                used = 0;
            }
            let (head, tail) = split_at_width(word, columns - used);
            row.push_str(head);
            if !tail.is_empty() {
                pending.push(tail);
            }
        } else {
            pending.push(word);
        }

        rows.push(std::mem::replace(&mut row, " ".repeat(hang)));
        used = hang;
        empty = true;
    }

    if !empty {
        rows.push(row);
    }
    rows
}

/// Split `word` after as many characters as fit in `budget` columns, taking at
/// least one character so wrapping always makes progress.
fn split_at_width(word: &str, budget: usize) -> (&str, &str) {
    let mut used = 0;
    for (index, ch) in word.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > budget {
            let index = if index == 0 { ch.len_utf8() } else { index };
            return word.split_at(index);
        }
    }
    (word, "")
}
