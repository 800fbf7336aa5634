//! Detail page for one starship.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
    Frame,
};

use super::{failure_lines, heading, loading_line};
use crate::app::DetailPage;
use crate::fetch::FetchState;
use crate::models::Starship;
use crate::ui::theme::{COLOR_DIM, COLOR_HEADER, COLOR_VALUE};

/// "Appears in N film(s)", singular only for exactly one.
pub fn appears_in(count: usize) -> String {
    let noun = if count == 1 { "film" } else { "films" };
    format!("Appears in {} {}", count, noun)
}

fn value(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

/// Label/value pairs shown under "Features", in display order.
pub fn feature_fields(ship: &Starship) -> Vec<(&'static str, &str)> {
    vec![
        ("Starship Class", value(&ship.starship_class)),
        ("Capacity", value(&ship.cargo_capacity)),
        ("Crew (size)", value(&ship.crew)),
        ("Passengers", value(&ship.passengers)),
        ("Manufacturer", value(&ship.manufacturer)),
        ("HD Rating", value(&ship.hyperdrive_rating)),
    ]
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    ))
}

fn bullet(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  • {}: ", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value.to_string(), Style::default().fg(COLOR_VALUE)),
    ])
}

pub fn detail_lines(ship: &Starship) -> Vec<Line<'static>> {
    let mut lines = vec![heading(ship.display_name()), Line::from(""), section("Features")];
    lines.extend(
        feature_fields(ship)
            .into_iter()
            .map(|(label, value)| bullet(label, value)),
    );
    lines.push(Line::from(""));
    lines.push(section("Star Wars Stats"));
    lines.push(Line::from(vec![
        Span::styled("  • ", Style::default().fg(COLOR_DIM)),
        Span::styled(appears_in(ship.film_count()), Style::default().fg(COLOR_VALUE)),
    ]));
    lines
}

pub fn render(frame: &mut Frame, area: Rect, page: &DetailPage, tick: u64) {
    let lines = match &page.state {
        FetchState::Loading => vec![loading_line(tick)],
        FetchState::Loaded(ship) => detail_lines(ship),
        FetchState::Failed(err) => failure_lines(format!("Could not load starship {}", page.id), err),
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
