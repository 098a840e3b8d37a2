//! Shared helpers for integration tests.

use tracing_subscriber::EnvFilter;

/// Route registry log events to the test writer (`RUST_LOG` overrides the default `info` filter).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_test_writer()
        .try_init();
}
