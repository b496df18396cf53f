//! Shared test utilities for the mdhead workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`docs`] — sample documents and a large-body document builder
//! - [`readers`] — instrumented [`std::io::Read`] implementations

pub mod docs;
pub mod readers;

use tracing_subscriber::{EnvFilter, fmt};

/// Install a test-friendly tracing subscriber, filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .compact()
        .try_init();
}
