//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so stdout carries only the greeting.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset and `--verbose` is off.
pub const DEFAULT_FILTER: &str = "greeter=warn";

/// Filter used when `RUST_LOG` is unset and `--verbose` is on.
pub const VERBOSE_FILTER: &str = "greeter=debug";

/// Builds the log filter, preferring `RUST_LOG` when it is set.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
