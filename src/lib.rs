//! Starships - a terminal browser for the Star Wars API starship catalogue
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod router;
pub mod terminal;
pub mod traits;
pub mod ui;
