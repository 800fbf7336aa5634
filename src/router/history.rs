use super::route::normalize_path;

/// Back/forward stack of visited paths.
///
/// Pushing a new path discards anything ahead of the cursor, the same way a
/// browser drops its forward list after a fresh navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![normalize_path(initial)],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Record a navigation. Pushing the current path again is a no-op.
    /// Returns whether a new entry was added.
    pub fn push(&mut self, path: &str) -> bool {
        let path = normalize_path(path);
        if path == self.current() {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path);
        self.cursor += 1;
        true
    }

    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes() {
        let history = History::new("ships/");
        assert_eq!(history.current(), "/ships");
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_push_back_forward() {
        let mut history = History::default();
        assert!(history.push("/ships"));
        assert!(history.push("/ships/9"));
        assert_eq!(history.len(), 3);

        assert_eq!(history.back(), Some("/ships"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("/ships"));
        assert_eq!(history.current(), "/ships");
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = History::default();
        history.push("/ships");
        history.push("/ships/9");
        history.back();
        history.push("/bogus");

        assert_eq!(history.current(), "/bogus");
        assert!(!history.can_go_forward());
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_push_same_path_is_noop() {
        let mut history = History::default();
        assert!(history.push("/ships"));
        assert!(!history.push("/ships/"));
        assert_eq!(history.len(), 2);
    }
}
