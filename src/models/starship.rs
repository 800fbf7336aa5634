//! Starship records and the listing envelope.

use serde::{Deserialize, Serialize};

use super::lenient;

/// One starship as returned by `GET /starships/{id}`.
///
/// Every field is optional; the views render a missing value as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub starship_class: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cargo_capacity: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub crew: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub passengers: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub hyperdrive_rating: Option<String>,
    /// References to the films this ship appears in; only the count is shown.
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub films: Option<Vec<String>>,
    /// Canonical API URL, which carries the record's identifier.
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: Option<String>,
}

/// An element of the listing collection. Same shape as [`Starship`]; the
/// list page reads only `name` and `url`.
pub type StarshipSummary = Starship;

impl Starship {
    /// Number of film references, 0 when the field is absent.
    pub fn film_count(&self) -> usize {
        self.films.as_ref().map_or(0, Vec::len)
    }

    /// Identifier embedded in the canonical URL, if any.
    pub fn id(&self) -> Option<String> {
        self.url.as_deref().and_then(id_from_url)
    }

    /// Display name, empty when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Body of `GET /starships`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarshipPage {
    #[serde(default)]
    pub count: Option<u64>,
    /// Present upstream but never followed.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<StarshipSummary>,
}

/// Extract a record identifier from its canonical API URL.
///
/// The identifier is the last non-empty path segment, e.g.
/// `https://swapi.dev/api/starships/9/` gives `9`. A URL whose path ends at
/// the collection itself (`.../starships/`) or has no path carries no
/// identifier.
pub fn id_from_url(url: &str) -> Option<String> {
    let url = url.split(['?', '#']).next().unwrap_or("");
    let after_scheme = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    let path = match after_scheme.find('/') {
        Some(idx) if url.contains("://") => &after_scheme[idx..],
        Some(_) => after_scheme,
        None if url.contains("://") => return None,
        None => after_scheme,
    };

    let segment = path.split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "starships" {
        return None;
    }
    Some(segment.to_string())
}
