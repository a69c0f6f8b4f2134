//! Diagnostic logging setup.
//!
//! Progress goes to stdout with `println!`; warnings and debug output go
//! through `tracing` to stderr so they never mix into piped progress.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default filter for a verbosity level: 0 is info, negative quiets to
/// warnings, positive enables debug.
pub fn default_directive(verbosity: i8) -> &'static str {
    match verbosity {
        i8::MIN..=-1 => "organizer=warn",
        0 => "organizer=info",
        _ => "organizer=debug",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbosity` when set.
/// Calling this twice is an error.
pub fn init(verbosity: i8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
