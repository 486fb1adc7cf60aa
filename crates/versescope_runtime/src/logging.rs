//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with explorer output on
//! stdout. `RUST_LOG` wins over the level passed on the command line.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Builds the filter from `RUST_LOG`, falling back to `default_level`.
#[must_use]
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs the global fmt subscriber. Calling it again is a no-op.
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
