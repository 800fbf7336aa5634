//! Fallback page for unmatched paths.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use super::heading;
use crate::ui::theme::COLOR_DIM;

pub const NOT_FOUND_TITLE: &str = "Page not found";

pub fn render(frame: &mut Frame, area: Rect, path: &str) {
    let lines = vec![
        heading(NOT_FOUND_TITLE),
        Line::from(""),
        Line::from(format!("Nothing lives at {}.", path)),
        Line::from(""),
        Line::from(Span::styled(
            "Press h for Home or s for Ships.",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1))),
        area,
    );
}
