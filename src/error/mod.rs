//! Error types for fetching starship records.
//!
//! There are two kinds of failure:
//!
//! | Kind | Variants | Cause |
//! |------|----------|-------|
//! | Network | `Network`, `Status` | Transport failure, timeout, non-2xx status |
//! | Parse | `Parse` | Body is not JSON of the expected shape |
//!
//! Both are logged once to the diagnostic sink and shown on the page.

mod fetch;

pub use fetch::{FetchError, FetchResult};
