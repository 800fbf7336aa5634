//! Shared fixtures for the integration tests.
//!
//! ```ignore
//! let mock = MockHttpClient::new();
//! mock.set_response(&ship_url("10"), MockResponse::json(falcon_json()));
//! let mut app = test_app(&mock, &MemoryDiagnostics::new(), "/ships/10");
//! settle(&mut app).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use serde_json::{json, Value};

pub use starships::adapters::mock::{MemoryDiagnostics, MockHttpClient, MockResponse};
use starships::api::StarshipApi;
use starships::app::App;
use starships::ui;

pub const API_BASE: &str = "https://swapi.test/api";

pub fn ships_url() -> String {
    format!("{}/starships", API_BASE)
}

pub fn ship_url(id: &str) -> String {
    format!("{}/starships/{}", API_BASE, id)
}

/// App wired to `mock` and `sink`, mounted at `path`.
pub fn test_app(mock: &MockHttpClient, sink: &MemoryDiagnostics, path: &str) -> App {
    let api = StarshipApi::new(Arc::new(mock.clone()), API_BASE);
    App::new(api, Arc::new(sink.clone()), path)
}

/// Wait for the next fetch result and apply it. Returns whether the page changed.
pub async fn settle(app: &mut App) -> bool {
    let mut rx = app.message_rx.take().expect("receiver already taken");
    let message = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for a fetch result")
        .expect("message channel closed");
    app.message_rx = Some(rx);
    app.handle_message(message)
}

/// Apply every result that arrives within `wait`. Returns how many changed the page.
pub async fn drain(app: &mut App, wait: Duration) -> usize {
    let mut rx = app.message_rx.take().expect("receiver already taken");
    let mut applied = 0;
    while let Ok(Some(message)) = tokio::time::timeout(wait, rx.recv()).await {
        if app.handle_message(message) {
            applied += 1;
        }
    }
    app.message_rx = Some(rx);
    applied
}

pub fn render_app(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    ui::buffer_text(terminal.backend().buffer())
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn alt(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::ALT)
}

pub fn falcon_json() -> Value {
    json!({
        "name": "Millennium Falcon",
        "model": "YT-1300 light freighter",
        "manufacturer": "Corellian Engineering Corporation",
        "cargo_capacity": "100000",
        "crew": "4",
        "passengers": "6",
        "hyperdrive_rating": "0.5",
        "starship_class": "Light freighter",
        "films": [
            "https://swapi.dev/api/films/1/",
            "https://swapi.dev/api/films/2/",
            "https://swapi.dev/api/films/3/"
        ],
        "url": "https://swapi.dev/api/starships/10/"
    })
}

pub fn listing_json() -> Value {
    json!({
        "count": 36,
        "next": "https://swapi.dev/api/starships/?page=2",
        "previous": null,
        "results": [
            {"name": "CR90 corvette", "url": "https://swapi.dev/api/starships/2/"},
            {"name": "Star Destroyer", "url": "https://swapi.dev/api/starships/3/"},
            {"name": "Sentinel-class landing craft", "url": "https://swapi.dev/api/starships/5/"}
        ]
    })
}
