//! Mock implementations for testing.
//!
//! These let the fetch flows run without network access and let tests
//! assert exactly what was reported through the diagnostic channel.

pub mod diagnostics;
pub mod http;

pub use diagnostics::{DiagnosticEntry, MemoryDiagnostics};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
