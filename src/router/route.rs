use std::fmt;

/// Top-level path of the listing page.
pub const SHIPS_PATH: &str = "/ships";

/// Page selected by a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Main,
    List,
    Detail(String),
    /// Holds the normalized path that failed to match.
    NotFound(String),
}

/// Normalize a raw path.
///
/// - query string and fragment are dropped
/// - a missing leading slash is added
/// - `.` and `..` segments are resolved, as a browser resolves a URL
/// - one trailing slash is dropped (except for `/` itself)
/// - surrounding whitespace is ignored
pub fn normalize_path(raw: &str) -> String {
    let path = raw.trim();
    let path = path.split(['?', '#']).next().unwrap_or("");
    let path = path.strip_prefix('/').unwrap_or(path);

    let mut segments: Vec<&str> = Vec::new();
    let mut ends_in_dir = false;
    for segment in path.split('/') {
        match segment {
            "." => ends_in_dir = true,
            ".." => {
                segments.pop();
                ends_in_dir = true;
            }
            _ => {
                segments.push(segment);
                ends_in_dir = false;
            }
        }
    }
    if ends_in_dir {
        segments.push("");
    }

    let mut normalized = format!("/{}", segments.join("/"));
    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

impl Route {
    /// Match a path against the route table.
    pub fn parse(raw: &str) -> Self {
        let path = normalize_path(raw);
        if path == "/" {
            return Route::Main;
        }

        let segments: Vec<&str> = path[1..].split('/').collect();
        match segments.as_slice() {
            ["ships"] => Route::List,
            ["ships", id] if !id.is_empty() => Route::Detail((*id).to_string()),
            _ => Route::NotFound(path),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Main => "/".to_string(),
            Route::List => SHIPS_PATH.to_string(),
            Route::Detail(id) => format!("{}/{}", SHIPS_PATH, id),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Route for one starship's detail page.
    pub fn ship(id: impl Into<String>) -> Self {
        Route::Detail(id.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Route::parse(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("ships"), "/ships");
        assert_eq!(normalize_path("/ships/"), "/ships");
        assert_eq!(normalize_path("/ships//"), "/ships/");
        assert_eq!(normalize_path(" /ships/9?x=1#top "), "/ships/9");
    }

    #[test]
    fn test_normalize_resolves_dot_segments() {
        assert_eq!(normalize_path("/ships/."), "/ships");
        assert_eq!(normalize_path("/ships/./9"), "/ships/9");
        assert_eq!(normalize_path("/ships/.."), "/");
        assert_eq!(normalize_path("/ships/../.."), "/");
        assert_eq!(normalize_path("/bogus/../ships/9"), "/ships/9");
        assert_eq!(normalize_path("/ships/9/.."), "/ships");
        // only whole segments are dots
        assert_eq!(normalize_path("/ships/..9"), "/ships/..9");
    }

    #[test]
    fn test_dot_segments_never_reach_detail() {
        assert_eq!(Route::parse("/ships/."), Route::List);
        assert_eq!(Route::parse("/ships/.."), Route::Main);
        assert_eq!(Route::parse("/ships/9/./"), Route::Detail("9".into()));
    }

    #[test]
    fn test_parse_table() {
        assert_eq!(Route::parse("/"), Route::Main);
        assert_eq!(Route::parse(""), Route::Main);
        assert_eq!(Route::parse("/ships"), Route::List);
        assert_eq!(Route::parse("/ships/"), Route::List);
        assert_eq!(Route::parse("/ships/9"), Route::Detail("9".into()));
        assert_eq!(Route::parse("/ships/9/"), Route::Detail("9".into()));
        assert_eq!(Route::parse("/ships/abc"), Route::Detail("abc".into()));
    }

    #[test]
    fn test_parse_not_found() {
        assert_eq!(Route::parse("/bogus"), Route::NotFound("/bogus".into()));
        assert_eq!(Route::parse("/ships/9/pilots"), Route::NotFound("/ships/9/pilots".into()));
        assert_eq!(Route::parse("/ships//"), Route::NotFound("/ships/".into()));
        assert_eq!(Route::parse("/Ships"), Route::NotFound("/Ships".into()));
        assert!(Route::parse("/starships").is_not_found());
    }

    #[test]
    fn test_path_round_trips() {
        for path in ["/", "/ships", "/ships/12", "/nowhere"] {
            assert_eq!(Route::parse(path).path(), path);
        }
        assert_eq!(Route::ship("3").to_string(), "/ships/3");
    }
}
