//! Listing page: one link per starship.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use super::{failure_lines, heading, loading_line};
use crate::app::{Link, ListPage};
use crate::fetch::FetchState;
use crate::ui::theme::{COLOR_DIM, COLOR_LINK, COLOR_SELECTED_BG};

pub const EMPTY_TEXT: &str = "No starships found.";

fn summary_line(page: &ListPage, shown: usize) -> String {
    match page.total {
        Some(total) if total != shown as u64 => format!("Showing {} of {}", shown, total),
        _ => format!("{} starships", shown),
    }
}

fn link_item(link: &Link) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(link.label.clone(), Style::default().fg(COLOR_LINK)),
        Span::styled(format!("  → {}", link.target), Style::default().fg(COLOR_DIM)),
    ]))
}

pub fn render(frame: &mut Frame, area: Rect, page: &ListPage, tick: u64) {
    let block = Block::default().padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &page.state {
        FetchState::Loading => {
            frame.render_widget(Paragraph::new(loading_line(tick)), inner);
        }
        FetchState::Failed(err) => {
            let lines = failure_lines("Could not load starships".to_string(), err);
            frame.render_widget(Paragraph::new(lines), inner);
        }
        FetchState::Loaded(_) => {
            let links = page.links();
            let [header_area, list_area] =
                Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

            let header = vec![
                heading("Starships"),
                Line::from(Span::styled(
                    summary_line(page, links.len()),
                    Style::default().fg(COLOR_DIM),
                )),
            ];
            frame.render_widget(Paragraph::new(header), header_area);

            if links.is_empty() {
                frame.render_widget(Paragraph::new(EMPTY_TEXT), list_area);
                return;
            }

            let items: Vec<ListItem> = links.iter().map(link_item).collect();
            let list = List::new(items)
                .highlight_style(
                    Style::default()
                        .bg(COLOR_SELECTED_BG)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("› ");
            let mut state = ListState::default().with_selected(Some(page.selected));
            frame.render_stateful_widget(list, list_area, &mut state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StarshipSummary;
    use crate::ui::test_support::draw_text;

    fn loaded(names: &[&str]) -> ListPage {
        let ships = names
            .iter()
            .enumerate()
            .map(|(i, name)| StarshipSummary {
                name: Some(name.to_string()),
                url: Some(format!("https://swapi.dev/api/starships/{}/", i + 2)),
                ..Default::default()
            })
            .collect();
        ListPage {
            state: FetchState::Loaded(ships),
            total: Some(names.len() as u64),
            selected: 0,
        }
    }

    #[test]
    fn test_render_links() {
        let page = loaded(&["CR90 corvette", "Star Destroyer"]);
        let text = draw_text(60, 8, |frame, area| render(frame, area, &page, 0));
        assert!(text.contains("2 starships"));
        assert!(text.contains("CR90 corvette  → /ships/2"));
        assert!(text.contains("Star Destroyer  → /ships/3"));
    }

    #[test]
    fn test_render_partial_listing_reports_total() {
        let mut page = loaded(&["CR90 corvette"]);
        page.total = Some(36);
        let text = draw_text(60, 6, |frame, area| render(frame, area, &page, 0));
        assert!(text.contains("Showing 1 of 36"));
    }

    #[test]
    fn test_summary_compares_totals_without_truncation() {
        let mut page = loaded(&["CR90 corvette"]);
        page.total = Some((1u64 << 32) + 1);
        assert_eq!(summary_line(&page, 1), "Showing 1 of 4294967297");
        page.total = Some(1);
        assert_eq!(summary_line(&page, 1), "1 starships");
    }

    #[test]
    fn test_render_empty() {
        let page = loaded(&[]);
        let text = draw_text(60, 6, |frame, area| render(frame, area, &page, 0));
        assert!(text.contains(EMPTY_TEXT));
    }

    #[test]
    fn test_render_loading() {
        let page = ListPage::default();
        let text = draw_text(40, 3, |frame, area| render(frame, area, &page, 0));
        assert!(text.contains("Loading..."));
    }
}
