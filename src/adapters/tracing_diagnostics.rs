//! Diagnostic sink backed by `tracing`.

use crate::traits::{DiagnosticLevel, DiagnosticSink};

/// Forwards diagnostic entries to the global tracing subscriber under the
/// `starships::diagnostics` target. Entries below `min_level` are dropped
/// before they reach tracing.
#[derive(Debug, Clone, Copy)]
pub struct TracingDiagnostics {
    min_level: DiagnosticLevel,
}

impl TracingDiagnostics {
    pub fn new(min_level: DiagnosticLevel) -> Self {
        Self { min_level }
    }

    pub fn min_level(&self) -> DiagnosticLevel {
        self.min_level
    }

    /// Whether an entry at `level` would be forwarded.
    pub fn enabled(&self, level: DiagnosticLevel) -> bool {
        level >= self.min_level
    }
}

impl Default for TracingDiagnostics {
    fn default() -> Self {
        Self::new(DiagnosticLevel::Info)
    }
}

impl DiagnosticSink for TracingDiagnostics {
    fn record(&self, level: DiagnosticLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        match level {
            DiagnosticLevel::Trace => tracing::trace!(target: "starships::diagnostics", "{}", message),
            DiagnosticLevel::Debug => tracing::debug!(target: "starships::diagnostics", "{}", message),
            DiagnosticLevel::Info => tracing::info!(target: "starships::diagnostics", "{}", message),
            DiagnosticLevel::Warn => tracing::warn!(target: "starships::diagnostics", "{}", message),
            DiagnosticLevel::Error => tracing::error!(target: "starships::diagnostics", "{}", message),
        }
    }
}
