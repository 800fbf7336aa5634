//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`TracingDiagnostics`] - Diagnostic sink forwarding to `tracing`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MemoryDiagnostics`] - Captures diagnostic entries in memory

pub mod mock;
pub mod reqwest_http;
pub mod tracing_diagnostics;

pub use mock::{MemoryDiagnostics, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
pub use tracing_diagnostics::TracingDiagnostics;
