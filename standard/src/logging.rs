//! Diagnostic tracing for the CLI.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary (or to embedding applications).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to `default_filter` (normally the config's
/// `log_filter`) when unset or unparsable. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=standard=trace standard derive --mapping '{"x":"a.b"}' --store '{"a":{"b":5}}'
/// ```
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
