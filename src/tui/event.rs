use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::app::{BgateError, Result};
use crate::tui::app::ViewEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

/// Blocking source of terminal events. Waiting here is the only place the
/// interactive loop suspends.
#[derive(Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn next(&self) -> Result<AppEvent> {
        let event = event::read().map_err(BgateError::DisplaySurface)?;
        Ok(match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            Event::Resize(width, height) => AppEvent::Resize(width, height),
            _ => AppEvent::Other,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
    None,
}

impl Action {
    pub fn into_view_event(self) -> Option<ViewEvent> {
        match self {
            Action::Quit => Some(ViewEvent::Quit),
            Action::ScrollDown => Some(ViewEvent::ScrollDown),
            Action::ScrollUp => Some(ViewEvent::ScrollUp),
            Action::PageDown => Some(ViewEvent::PageDown),
            Action::PageUp => Some(ViewEvent::PageUp),
            Action::Top => Some(ViewEvent::Top),
            Action::Bottom => Some(ViewEvent::Bottom),
            Action::None => None,
        }
    }
}
