//! Logging setup for binaries built on the client

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber
///
/// Honours `RUST_LOG`; falls back to `info`.
pub fn init_logger() {
    init_logger_with_level("info");
}

/// Initialize the global subscriber with a fallback filter for when
/// `RUST_LOG` is unset or invalid
pub fn init_logger_with_level(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}
