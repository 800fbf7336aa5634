//! Logging setup.
//!
//! The terminal belongs to the UI, so tracing output goes to a log file.
//! The filter defaults to `starships=<level>`; `RUST_LOG` overrides it.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::traits::DiagnosticLevel;

pub fn to_tracing_level(level: DiagnosticLevel) -> Level {
    match level {
        DiagnosticLevel::Trace => Level::TRACE,
        DiagnosticLevel::Debug => Level::DEBUG,
        DiagnosticLevel::Info => Level::INFO,
        DiagnosticLevel::Warn => Level::WARN,
        DiagnosticLevel::Error => Level::ERROR,
    }
}

/// Default filter directive for `level`.
pub fn default_filter(level: DiagnosticLevel) -> String {
    format!("starships={}", to_tracing_level(level))
}

/// Install the global subscriber writing to `log_file`.
///
/// Parent directories are created. The file is appended to. Installing a
/// second subscriber is silently ignored.
pub fn init_logging(level: DiagnosticLevel, log_file: &Path) -> io::Result<()> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false),
    );

    let _ = subscriber.try_init();
    Ok(())
}
