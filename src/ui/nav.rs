//! Navigation bar.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::router::{Route, SHIPS_PATH};

/// A top-level link in the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub key: char,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Home",
        path: "/",
        key: 'h',
    },
    NavLink {
        label: "Ships",
        path: SHIPS_PATH,
        key: 's',
    },
];

/// The nav link to highlight for `route`. Detail pages sit under Ships.
pub fn active_link(route: &Route) -> Option<&'static NavLink> {
    match route {
        Route::Main => Some(&NAV_LINKS[0]),
        Route::List | Route::Detail(_) => Some(&NAV_LINKS[1]),
        Route::NotFound(_) => None,
    }
}

pub fn render_nav(frame: &mut Frame, area: Rect, route: &Route, current_path: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Starships ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let active = active_link(route);
    let mut spans = Vec::new();
    for link in NAV_LINKS.iter() {
        let style = if Some(link) == active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        spans.push(Span::styled(link.label, style));
        spans.push(Span::styled(format!(" [{}]", link.key), Style::default().fg(COLOR_DIM)));
        spans.push(Span::raw("   "));
    }

    let [links_area, path_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Percentage(50)]).areas(inner);
    frame.render_widget(Paragraph::new(Line::from(spans)), links_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            current_path.to_string(),
            Style::default().fg(COLOR_DIM),
        )))
        .right_aligned(),
        path_area,
    );
}
