//! Logging setup for the binaries.
//!
//! The library only emits `tracing` events: `debug!` when a driver starts and stops, `trace!`
//! per expansion, `warn!` for skipped battery cases. Nothing is printed unless a subscriber is
//! installed:
//!
//! ```bash
//! RUST_LOG=river_crossing=debug cargo run --bin solve -- astar classic_default
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    install(filter);
}

/// Install a stderr subscriber at a fixed level (`"trace"`, `"debug"`, `"info"`, ...).
pub fn init_logging_with_level(level: &str) {
    install(EnvFilter::new(level));
}

fn install(filter: EnvFilter) {
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
