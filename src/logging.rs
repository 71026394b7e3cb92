//! Log output for native builds.
//!
//! Filtering follows `RUST_LOG`, e.g.:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=bookgrid::state=debug` - state transitions only
//!
//! Without `RUST_LOG` only warnings and errors are printed.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install a stderr subscriber. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    // A second init fails because a global subscriber already exists.
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
