//! Path routing and navigation history.
//!
//! | Path | Route |
//! |------|-------|
//! | `/` | [`Route::Main`] |
//! | `/ships` | [`Route::List`] |
//! | `/ships/:id` | [`Route::Detail`] |
//! | anything else | [`Route::NotFound`] |

mod history;
mod route;

pub use history::History;
pub use route::{normalize_path, Route, SHIPS_PATH};
