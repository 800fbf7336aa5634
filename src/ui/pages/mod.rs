//! Page views, one module per route.

pub mod main_page;
pub mod not_found;
pub mod ships_list;
pub mod starship;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_LOADING};
use crate::error::FetchError;

/// Spinner animation frames
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_TEXT: &str = "Loading...";

pub(crate) fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn loading_line(tick: u64) -> Line<'static> {
    let frame = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
    Line::from(vec![
        Span::styled(format!("{} ", frame), Style::default().fg(COLOR_LOADING)),
        Span::styled(
            LOADING_TEXT,
            Style::default().fg(COLOR_LOADING).add_modifier(Modifier::BOLD),
        ),
    ])
}

pub(crate) fn failure_lines(title: String, err: &FetchError) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(err.user_message()),
        Line::from(Span::styled(err.to_string(), Style::default().fg(COLOR_DIM))),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to reload or b to go back.",
            Style::default().fg(COLOR_DIM),
        )),
    ]
}
