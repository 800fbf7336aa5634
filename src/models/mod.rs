//! Records returned by the starship API.

mod lenient;
pub mod starship;

pub use starship::{id_from_url, Starship, StarshipPage, StarshipSummary};
