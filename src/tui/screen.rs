use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use crate::layout::{DisplayLine, LineStyle};
use crate::tui::app::Viewer;

pub fn render(frame: &mut Frame, viewer: &Viewer) {
    let margin = " ".repeat(viewer.padding());
    let lines: Vec<Line> = viewer
        .visible()
        .iter()
        .map(|line| styled_line(&margin, line))
        .collect();

    frame.render_widget(Paragraph::new(Text::from(lines)), frame.area());
}

fn styled_line<'a>(margin: &'a str, line: &'a DisplayLine) -> Line<'a> {
    let style = match line.style {
        LineStyle::Section | LineStyle::Chapter => Style::default().add_modifier(Modifier::BOLD),
        LineStyle::Body | LineStyle::Blank => Style::default(),
    };
    Line::from(vec![
        Span::raw(margin),
        Span::styled(line.text.as_str(), style),
    ])
}
