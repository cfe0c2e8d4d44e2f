//! Structured logging with tracing
//!
//! Events go to stderr so stdout carries nothing but results.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when neither `--log-level` nor `RUST_LOG` says otherwise
pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `level`. Calling this twice is harmless;
/// the second subscriber is ignored.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
