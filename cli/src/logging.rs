//! Diagnostic logging to stderr.
//!
//! User-facing output goes through `crate::output`; this is for `tracing`
//! events only. `RUST_LOG` takes precedence over `--verbose`.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "stackctl=debug" } else { "stackctl=warn" }
}
