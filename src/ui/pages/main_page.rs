//! Landing page. No data dependency.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
    Frame,
};

use super::heading;
use crate::ui::theme::{COLOR_DIM, COLOR_LINK};

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        heading("Star Wars Starships"),
        Line::from(""),
        Line::from("Browse the starships of a galaxy far, far away."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("s", Style::default().fg(COLOR_LINK)),
            Span::raw(" to see every ship, or "),
            Span::styled("g", Style::default().fg(COLOR_LINK)),
            Span::raw(" to type a path such as /ships/9."),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Data from the Star Wars API.",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::draw_text;

    #[test]
    fn test_render_main() {
        let text = draw_text(80, 10, |frame, area| render(frame, area));
        assert!(text.contains("Star Wars Starships"));
        assert!(!text.contains("Loading"));
    }
}
