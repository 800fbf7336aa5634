//! Navigation methods for the App.

use super::{App, PageView};
use crate::router::Route;

impl App {
    /// Navigate to `path`, recording it in history.
    ///
    /// Navigating to the path already shown does nothing, matching a link
    /// click on the current page.
    pub fn navigate(&mut self, path: &str) {
        if self.history.push(path) {
            let route = Route::parse(self.history.current());
            self.mount(route);
        }
    }

    /// Step back in history. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        match self.history.back() {
            Some(path) => {
                let route = Route::parse(path);
                self.mount(route);
                true
            }
            None => false,
        }
    }

    /// Step forward in history. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        match self.history.forward() {
            Some(path) => {
                let route = Route::parse(path);
                self.mount(route);
                true
            }
            None => false,
        }
    }

    /// Remount the current route, discarding its data and fetching again.
    pub fn reload(&mut self) {
        let route = Route::parse(self.history.current());
        self.mount(route);
    }

    pub fn select_next(&mut self) {
        if let PageView::List(page) = &mut self.page.view {
            page.select_next();
            self.needs_redraw = true;
        }
    }

    pub fn select_prev(&mut self) {
        if let PageView::List(page) = &mut self.page.view {
            page.select_prev();
            self.needs_redraw = true;
        }
    }

    /// Follow the selected link on the list page.
    pub fn open_selected(&mut self) -> bool {
        let target = match &self.page.view {
            PageView::List(page) => page.selected_link().map(|link| link.target),
            _ => None,
        };
        match target {
            Some(target) => {
                self.navigate(&target);
                true
            }
            None => false,
        }
    }

    /// Navigate to whatever the address bar holds, if it is open.
    pub fn submit_address(&mut self) {
        if let Some(path) = self.address_bar.submit() {
            self.navigate(&path);
        }
        self.needs_redraw = true;
    }
}
