//! Application state: the router outlet, history, and fetch results.
//!
//! Fetches run on spawned tasks and report back through `message_tx`; the
//! event loop feeds each [`AppMessage`] into [`App::handle_message`].

mod address_bar;
mod handlers;
mod messages;
mod navigation;
mod pages;

pub use address_bar::AddressBar;
pub use messages::AppMessage;
pub use pages::{summary_links, DetailPage, Link, ListPage, MountedPage, PageView};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::StarshipApi;
use crate::error::FetchError;
use crate::fetch::{FetchHandle, FetchState, MountId};
use crate::router::{History, Route};
use crate::traits::DiagnosticSink;

pub struct App {
    api: StarshipApi,
    diagnostics: Arc<dyn DiagnosticSink>,
    pub history: History,
    pub page: MountedPage,
    pub address_bar: AddressBar,
    last_mount: MountId,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub tick_count: u64,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("api", &self.api)
            .field("history", &self.history)
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create the app and mount the page for `initial_path`.
    ///
    /// Must be called inside a tokio runtime: mounting a data page spawns
    /// its fetch.
    pub fn new(api: StarshipApi, diagnostics: Arc<dyn DiagnosticSink>, initial_path: &str) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let history = History::new(initial_path);
        let route = Route::parse(history.current());

        let mut app = Self {
            api,
            diagnostics,
            history,
            page: MountedPage {
                route: Route::Main,
                mount_id: MountId::default(),
                view: PageView::Main,
                fetch: None,
            },
            address_bar: AddressBar::default(),
            last_mount: MountId::default(),
            message_tx,
            message_rx: Some(message_rx),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        };
        app.mount(route);
        app
    }

    pub fn api(&self) -> &StarshipApi {
        &self.api
    }

    pub fn route(&self) -> &Route {
        &self.page.route
    }

    pub fn current_path(&self) -> &str {
        self.history.current()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        // keep the loading spinner moving
        if self.page.view.is_loading() {
            self.needs_redraw = true;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Replace the mounted page with a fresh one for `route`.
    ///
    /// The previous page is dropped first, aborting its fetch if it has not
    /// finished.
    pub(crate) fn mount(&mut self, route: Route) {
        self.last_mount = self.last_mount.next();
        let mount_id = self.last_mount;

        let (view, fetch) = match &route {
            Route::Main => (PageView::Main, None),
            Route::NotFound(path) => (PageView::NotFound(path.clone()), None),
            Route::List => {
                let api = self.api.clone();
                let tx = self.message_tx.clone();
                let fetch = FetchHandle::spawn(mount_id, async move {
                    let result = api.list_starships().await;
                    let _ = tx.send(AppMessage::StarshipsFetched { mount_id, result });
                });
                (PageView::List(ListPage::default()), Some(fetch))
            }
            Route::Detail(id) => {
                let api = self.api.clone();
                let tx = self.message_tx.clone();
                let ship_id = id.clone();
                let fetch = FetchHandle::spawn(mount_id, async move {
                    let result = api.get_starship(&ship_id).await;
                    let _ = tx.send(AppMessage::StarshipFetched { mount_id, result });
                });
                (PageView::Detail(DetailPage::new(id.clone())), Some(fetch))
            }
        };

        tracing::info!("mount {} {} ({})", mount_id, route, view.name());
        self.page = MountedPage {
            route,
            mount_id,
            view,
            fetch,
        };
        self.needs_redraw = true;
    }

    /// Apply a fetch result. Returns whether the mounted page changed.
    ///
    /// Results for a page that has since been unmounted are discarded
    /// without touching the diagnostic sink.
    pub fn handle_message(&mut self, message: AppMessage) -> bool {
        if message.mount_id() != self.page.mount_id {
            tracing::debug!(
                "discarding result for unmounted page {} (current {})",
                message.mount_id(),
                self.page.mount_id
            );
            return false;
        }

        let applied = match (message, &mut self.page.view) {
            (AppMessage::StarshipFetched { result, .. }, PageView::Detail(page)) => {
                if let Err(err) = &result {
                    report_failure(self.diagnostics.as_ref(), err);
                }
                page.state = result.into();
                true
            }
            (AppMessage::StarshipsFetched { result, .. }, PageView::List(page)) => {
                match result {
                    Ok(listing) => {
                        page.total = listing.count;
                        page.selected = 0;
                        page.state = FetchState::Loaded(listing.results);
                    }
                    Err(err) => {
                        report_failure(self.diagnostics.as_ref(), &err);
                        page.state = FetchState::Failed(err);
                    }
                }
                true
            }
            (message, view) => {
                tracing::warn!(
                    "result {:?} does not match mounted {} page",
                    message.mount_id(),
                    view.name()
                );
                false
            }
        };

        if applied {
            self.page.fetch = None;
            self.needs_redraw = true;
        }
        applied
    }
}

fn report_failure(diagnostics: &dyn DiagnosticSink, err: &FetchError) {
    let kind = if err.is_parse() { "parse" } else { "network" };
    diagnostics.error(&format!("{} failure: {}", kind, err));
}
