//! Diagnostic output seam.
//!
//! Fetch failures are reported through a [`DiagnosticSink`] handed to the
//! app at construction, so where they end up (log file, memory, nowhere) is
//! a wiring decision rather than a hardcoded console write.

use std::fmt;

/// Severity of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl DiagnosticLevel {
    /// Parse a level name (case-insensitive). `warning` is accepted for `warn`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver for leveled diagnostic entries.
///
/// Implementations must be cheap to call from the UI loop; they should not
/// block on I/O.
pub trait DiagnosticSink: Send + Sync {
    /// Record one entry.
    fn record(&self, level: DiagnosticLevel, message: &str);

    fn error(&self, message: &str) {
        self.record(DiagnosticLevel::Error, message);
    }

    fn warn(&self, message: &str) {
        self.record(DiagnosticLevel::Warn, message);
    }

    fn info(&self, message: &str) {
        self.record(DiagnosticLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!(DiagnosticLevel::parse("error"), Some(DiagnosticLevel::Error));
        assert_eq!(DiagnosticLevel::parse("WARN"), Some(DiagnosticLevel::Warn));
        assert_eq!(DiagnosticLevel::parse("warning"), Some(DiagnosticLevel::Warn));
        assert_eq!(DiagnosticLevel::parse(" info "), Some(DiagnosticLevel::Info));
        assert_eq!(DiagnosticLevel::parse("debug"), Some(DiagnosticLevel::Debug));
        assert_eq!(DiagnosticLevel::parse("trace"), Some(DiagnosticLevel::Trace));
        assert_eq!(DiagnosticLevel::parse("loud"), None);
    }

    #[test]
    fn test_levels_are_ordered_by_severity() {
        assert!(DiagnosticLevel::Error > DiagnosticLevel::Warn);
        assert!(DiagnosticLevel::Warn > DiagnosticLevel::Info);
        assert!(DiagnosticLevel::Debug > DiagnosticLevel::Trace);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for level in [
            DiagnosticLevel::Trace,
            DiagnosticLevel::Debug,
            DiagnosticLevel::Info,
            DiagnosticLevel::Warn,
            DiagnosticLevel::Error,
        ] {
            assert_eq!(DiagnosticLevel::parse(&level.to_string()), Some(level));
        }
    }
}
