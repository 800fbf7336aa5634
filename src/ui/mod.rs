//! UI rendering.
//!
//! The screen is the app shell: nav bar on top, the routed page in the
//! middle, and a footer with key hints or the address bar.

mod footer;
mod nav;
pub mod pages;
mod theme;

pub use footer::render_footer;
pub use nav::{active_link, render_nav, NavLink, NAV_LINKS};
pub use theme::*;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::{App, PageView};

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let [nav_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_nav(frame, nav_area, app.route(), app.current_path());
    render_page(frame, body_area, &app.page.view, app.tick_count);
    render_footer(frame, footer_area, &app.address_bar, &app.history);
}

/// Router outlet: draw whichever page is mounted.
pub fn render_page(frame: &mut Frame, area: Rect, view: &PageView, tick: u64) {
    match view {
        PageView::Main => pages::main_page::render(frame, area),
        PageView::List(page) => pages::ships_list::render(frame, area, page, tick),
        PageView::Detail(page) => pages::starship::render(frame, area, page, tick),
        PageView::NotFound(path) => pages::not_found::render(frame, area, path),
    }
}

/// Text content of a rendered buffer, one line per row, trailing spaces
/// trimmed.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut row = String::new();
        for x in area.left()..area.right() {
            row.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, layout::Rect, Frame, Terminal};

    /// Draw with `draw` on a `width`x`height` test terminal and return the text.
    pub fn draw_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame, Rect)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area);
            })
            .unwrap();
        super::buffer_text(terminal.backend().buffer())
    }
}
