//! Test helper functions and utilities

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize test logging with environment-based configuration.
///
/// Honours `RUST_LOG`, falling back to `sales_metrics=debug,warn`. Output goes
/// through the test writer so it is captured per test. Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sales_metrics=debug,warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
