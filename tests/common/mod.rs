//! Shared helpers for integration tests

use tracing_subscriber::EnvFilter;

/// Route the crate's debug events to the test output.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("kvstash=debug"))
        .with_test_writer()
        .try_init();
}
