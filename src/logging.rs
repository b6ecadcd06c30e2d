//! logging
//!
//! Diagnostic logging for the `cl` binary.
//!
//! The library only emits `tracing` events: `debug` when a dataset or config
//! file is loaded, `trace` on individual lookups. This module installs the
//! subscriber that renders them.
//!
//! - Writes to stderr so stdout stays clean for query results
//! - Filtered by `RUST_LOG` when set
//! - Otherwise `warn`, or `debug` for this crate under `--debug`

use std::io;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "warn,countrylang=debug"
    } else {
        "warn"
    }
}

/// Initialize the global subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(debug: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(debug)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
