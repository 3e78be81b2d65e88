//! Logging setup for binaries and examples
//!
//! The library itself only emits `tracing` events; this module is behind
//! the `logger` feature so library users pick their own subscriber.

/// Initialize a `tracing` subscriber filtered by `RUST_LOG`
/// (default: `boost_client=info`).
pub fn init_logger() {
    init_logger_with_level(None);
}

/// Initialize with an explicit default directive when `RUST_LOG` is unset
pub fn init_logger_with_level(default_directive: Option<&str>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        default_directive
            .unwrap_or("boost_client=info")
            .into()
    });

    // A second initialization (e.g. from several tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();
}
