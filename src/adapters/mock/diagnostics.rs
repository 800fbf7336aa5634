//! In-memory diagnostic sink for tests.

use std::sync::{Arc, Mutex};

use crate::traits::{DiagnosticLevel, DiagnosticSink};

/// One captured diagnostic entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub level: DiagnosticLevel,
    pub message: String,
}

/// Captures every entry it receives. Clones share the same buffer, so a
/// test can keep one handle and give another to the app.
#[derive(Debug, Clone, Default)]
pub struct MemoryDiagnostics {
    entries: Arc<Mutex<Vec<DiagnosticEntry>>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries recorded so far, oldest first.
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Entries at exactly `level`.
    pub fn entries_at(&self, level: DiagnosticLevel) -> Vec<DiagnosticEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn record(&self, level: DiagnosticLevel, message: &str) {
        self.entries.lock().unwrap().push(DiagnosticEntry {
            level,
            message: message.to_string(),
        });
    }
}
