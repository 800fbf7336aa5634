//! Per-page state owned by the mounted page.

use crate::fetch::{FetchHandle, FetchState, MountId};
use crate::models::{Starship, StarshipSummary};
use crate::router::Route;

/// A navigable entry: label shown, path it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub target: String,
}

impl Link {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// State of the StarshipsList page.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    pub state: FetchState<Vec<StarshipSummary>>,
    /// Total reported by the API, which may exceed the entries returned
    pub total: Option<u64>,
    pub selected: usize,
}

impl ListPage {
    /// One link per fetched summary, in API order. Empty until loaded.
    pub fn links(&self) -> Vec<Link> {
        self.state
            .loaded()
            .map(|ships| summary_links(ships))
            .unwrap_or_default()
    }

    pub fn select_next(&mut self) {
        let count = self.links().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_link(&self) -> Option<Link> {
        self.links().into_iter().nth(self.selected)
    }
}

/// Links for a listing. The detail id comes from each entry's canonical URL,
/// falling back to its 1-based position when the URL carries none.
pub fn summary_links(ships: &[StarshipSummary]) -> Vec<Link> {
    ships
        .iter()
        .enumerate()
        .map(|(index, ship)| {
            let id = ship.id().unwrap_or_else(|| (index + 1).to_string());
            Link::new(ship.display_name(), Route::ship(id).path())
        })
        .collect()
}

/// State of the Starship detail page.
#[derive(Debug, Clone)]
pub struct DetailPage {
    pub id: String,
    pub state: FetchState<Starship>,
}

impl DetailPage {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: FetchState::Loading,
        }
    }
}

/// What the router outlet is showing.
#[derive(Debug, Clone)]
pub enum PageView {
    Main,
    List(ListPage),
    Detail(DetailPage),
    NotFound(String),
}

impl PageView {
    pub fn name(&self) -> &'static str {
        match self {
            PageView::Main => "Main",
            PageView::List(_) => "StarshipsList",
            PageView::Detail(_) => "Starship",
            PageView::NotFound(_) => "NotFound",
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            PageView::List(page) => page.state.is_loading(),
            PageView::Detail(page) => page.state.is_loading(),
            PageView::Main | PageView::NotFound(_) => false,
        }
    }
}

/// The currently mounted page plus the fetch it owns.
///
/// Replacing the mounted page drops `fetch`, which aborts an unfinished
/// request.
#[derive(Debug)]
pub struct MountedPage {
    pub route: Route,
    pub mount_id: MountId,
    pub view: PageView,
    pub(crate) fetch: Option<FetchHandle>,
}

impl MountedPage {
    pub fn has_pending_fetch(&self) -> bool {
        self.fetch.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship(name: &str, url: Option<&str>) -> StarshipSummary {
        StarshipSummary {
            name: Some(name.to_string()),
            url: url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_links_use_url_id() {
        let ships = vec![
            ship("CR90 corvette", Some("https://swapi.dev/api/starships/2/")),
            ship("Death Star", Some("https://swapi.dev/api/starships/9/")),
        ];
        assert_eq!(
            summary_links(&ships),
            vec![
                Link::new("CR90 corvette", "/ships/2"),
                Link::new("Death Star", "/ships/9"),
            ]
        );
    }

    #[test]
    fn test_summary_links_fall_back_to_position() {
        let ships = vec![ship("A", None), ship("B", Some("https://swapi.dev/api/starships/"))];
        let links = summary_links(&ships);
        assert_eq!(links[0].target, "/ships/1");
        assert_eq!(links[1].target, "/ships/2");
    }

    #[test]
    fn test_list_selection_is_clamped() {
        let mut page = ListPage {
            state: FetchState::Loaded(vec![ship("A", None), ship("B", None)]),
            ..Default::default()
        };
        page.select_prev();
        assert_eq!(page.selected, 0);
        page.select_next();
        page.select_next();
        assert_eq!(page.selected, 1);
        assert_eq!(page.selected_link().unwrap().label, "B");
    }

    #[test]
    fn test_list_without_data_has_no_links() {
        let mut page = ListPage::default();
        assert!(page.links().is_empty());
        page.select_next();
        assert_eq!(page.selected, 0);
        assert_eq!(page.selected_link(), None);
    }

    #[test]
    fn test_page_view_loading() {
        assert!(PageView::Detail(DetailPage::new("9")).is_loading());
        assert!(!PageView::Main.is_loading());
        assert_eq!(PageView::NotFound("/x".into()).name(), "NotFound");
    }
}
