pub mod app;
pub mod event;
pub mod screen;

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    execute,
    style::{style, Stylize},
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use crate::app::{BgateError, Result};
use crate::config::KeybindingConfig;
use crate::domain::Passage;
use crate::layout::LineStyle;

use self::app::{ViewEvent, Viewer};
use self::event::{AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Render the whole passage for a single print at `width` columns.
///
/// With `emphasis`, headings and chapter numbers carry ANSI bold.
pub fn render(passage: Passage, width: usize, padding: usize, emphasis: bool) -> Result<String> {
    let viewer = Viewer::new(passage, padding, width, usize::MAX)?;
    let margin = " ".repeat(padding);

    let mut out = String::new();
    for line in viewer.visible() {
        if !line.text.is_empty() {
            out.push_str(&margin);
            match line.style {
                LineStyle::Section | LineStyle::Chapter if emphasis => {
                    out.push_str(&style(line.text.as_str()).bold().to_string());
                }
                _ => out.push_str(&line.text),
            }
        }
        out.push('\n');
    }
    Ok(out)
}

/// Width of the controlling terminal in columns.
pub fn terminal_width() -> Result<usize> {
    let (width, _) = terminal::size().map_err(BgateError::TerminalQueryFailed)?;
    Ok(width as usize)
}

/// Show the passage in a scrollable full-screen view until the user quits.
pub fn run(passage: Passage, padding: usize, keybindings: &KeybindingConfig) -> Result<()> {
    for binding in keybindings.invalid_bindings() {
        warn!(binding = %binding, "Ignoring unparseable keybinding");
    }

    let (width, height) = terminal::size().map_err(BgateError::DisplaySurface)?;
    // Layout problems surface here, before the terminal is touched.
    let mut viewer = Viewer::new(passage, padding, width as usize, height as usize)?;

    let mut session = TerminalSession::enter()?;
    let result = run_viewer(session.terminal()?, &mut viewer, keybindings);
    let restored = session.leave();
    result.and(restored)
}

fn run_viewer(terminal: &mut Tui, viewer: &mut Viewer, keybindings: &KeybindingConfig) -> Result<()> {
    let events = EventHandler::new();

    while viewer.is_active() {
        terminal
            .draw(|frame| screen::render(frame, viewer))
            .map_err(BgateError::DisplaySurface)?;

        let event = match events.next()? {
            AppEvent::Key(key) => keybindings.get_action(&key).into_view_event(),
            AppEvent::Resize(width, height) => Some(ViewEvent::Resize {
                width: width as usize,
                height: height as usize,
            }),
            AppEvent::Other => None,
        };

        if let Some(event) = event {
            viewer.handle(event);
        }
    }

    Ok(())
}

/// Raw mode and the alternate screen, held for the life of the view.
///
/// Dropping the session restores the terminal, so every exit path (including
/// a half-finished `enter` and unwinding panics) gives the terminal back.
struct TerminalSession {
    terminal: Option<Tui>,
    restored: bool,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode().map_err(BgateError::DisplaySurface)?;
        let mut session = Self {
            terminal: None,
            restored: false,
        };

        execute!(io::stdout(), EnterAlternateScreen).map_err(BgateError::DisplaySurface)?;
        let terminal =
            Terminal::new(CrosstermBackend::new(io::stdout())).map_err(BgateError::DisplaySurface)?;
        session.terminal = Some(terminal);
        Ok(session)
    }

    fn terminal(&mut self) -> Result<&mut Tui> {
        self.terminal.as_mut().ok_or_else(|| {
            BgateError::DisplaySurface(io::Error::new(
                io::ErrorKind::NotConnected,
                "terminal session is not active",
            ))
        })
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
        raw.and(screen)
    }

    fn leave(mut self) -> Result<()> {
        self.restore().map_err(BgateError::DisplaySurface)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
