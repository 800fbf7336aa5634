//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET against the starship API
//! - [`DiagnosticSink`] - Leveled diagnostic output for fetch failures

pub mod diagnostics;
pub mod http;

pub use diagnostics::{DiagnosticLevel, DiagnosticSink};
pub use http::{Headers, HttpClient, HttpError, Response};
