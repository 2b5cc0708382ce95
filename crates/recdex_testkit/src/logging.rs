//! Test logging setup.

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber.
///
/// Honors `RUST_LOG` and falls back to `warn`, so overwrite warnings from the
/// engine show up in failing test output. Safe to call from every test; only
/// the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
