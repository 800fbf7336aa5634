//! Footer: key hints, or the address bar while it is open.

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};
use crate::app::AddressBar;
use crate::router::History;

const PROMPT: &str = "Go to: ";

pub fn render_footer(frame: &mut Frame, area: Rect, address_bar: &AddressBar, history: &History) {
    if let Some(input) = address_bar.input() {
        let line = Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(COLOR_ACCENT)),
            Span::styled(input.to_string(), Style::default().fg(COLOR_HEADER)),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        let x = area
            .x
            .saturating_add(PROMPT.len() as u16)
            .saturating_add(address_bar.cursor_offset())
            .min(area.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, area.y));
        return;
    }

    let hint = |key: &str, label: &str, enabled: bool| {
        let key_style = if enabled {
            Style::default().fg(COLOR_HEADER)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        vec![
            Span::styled(key.to_string(), key_style),
            Span::styled(format!(" {}  ", label), Style::default().fg(COLOR_DIM)),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(hint("g", "go to", true));
    spans.extend(hint("b", "back", history.can_go_back()));
    spans.extend(hint("f", "forward", history.can_go_forward()));
    spans.extend(hint("r", "reload", true));
    spans.extend(hint("q", "quit", true));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
