use std::io::{self, IsTerminal, Write};

use crate::app::{AppContext, Result};
use crate::cli::Settings;
use crate::domain::Passage;
use crate::tui;

/// Look up the passage and show it in the configured mode.
pub async fn show_passage(ctx: &AppContext, settings: &Settings) -> Result<()> {
    let passage = ctx.load_passage(&settings.query).await?;

    if settings.interactive {
        tui::run(passage, settings.padding, &settings.keybindings)
    } else {
        print_passage(passage, settings.padding)
    }
}

/// Print the whole passage to stdout, wrapped to the terminal width.
pub fn print_passage(passage: Passage, padding: usize) -> Result<()> {
    let width = tui::terminal_width()?;
    let mut stdout = io::stdout();
    let emphasis = stdout.is_terminal();
    let text = tui::render(passage, width, padding, emphasis)?;

    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
