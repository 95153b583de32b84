use tracing::{debug, warn};

use crate::app::Result;
use crate::domain::Passage;
use crate::layout::{self, DisplayLine};

/// Input to the viewer, already decoded from raw terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
    Resize { width: usize, height: usize },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Terminated,
}

/// Scroll state over a laid-out passage.
///
/// `offset` always stays within `0..=max_offset()`.
pub struct Viewer {
    passage: Passage,
    padding: usize,
    width: usize,
    height: usize,
    offset: usize,
    lines: Vec<DisplayLine>,
    phase: Phase,
}

impl Viewer {
    /// Lay out `passage` for a `width` by `height` viewport.
    ///
    /// Fails with `InvalidLayout` if the padding leaves no room for text.
    pub fn new(passage: Passage, padding: usize, width: usize, height: usize) -> Result<Self> {
        let lines = layout::layout(&passage, width, padding)?;
        debug!(lines = lines.len(), width, height, "Laid out passage");
        Ok(Self {
            passage,
            padding,
            width,
            height,
            offset: 0,
            lines,
            phase: Phase::Active,
        })
    }

    pub fn handle(&mut self, event: ViewEvent) {
        if self.phase == Phase::Terminated {
            return;
        }

        match event {
            ViewEvent::ScrollDown => self.scroll_to(self.offset.saturating_add(1)),
            ViewEvent::ScrollUp => self.scroll_to(self.offset.saturating_sub(1)),
            ViewEvent::PageDown => self.scroll_to(self.offset.saturating_add(self.page())),
            ViewEvent::PageUp => self.scroll_to(self.offset.saturating_sub(self.page())),
            ViewEvent::Top => self.scroll_to(0),
            ViewEvent::Bottom => self.scroll_to(self.max_offset()),
            ViewEvent::Resize { width, height } => self.resize(width, height),
            ViewEvent::Quit => self.phase = Phase::Terminated,
        }
    }

    fn resize(&mut self, width: usize, height: usize) {
        debug!(width, height, "Resize");
        self.width = width;
        self.height = height;
        self.lines = match layout::layout(&self.passage, width, self.padding) {
            Ok(lines) => lines,
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        };
        self.scroll_to(self.offset);
    }

    fn scroll_to(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    fn page(&self) -> usize {
        self.height.max(1)
    }

    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    /// The rows currently in view.
    pub fn visible(&self) -> &[DisplayLine] {
        let end = self.offset.saturating_add(self.height).min(self.lines.len());
        &self.lines[self.offset..end]
    }

    pub fn lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }
}
