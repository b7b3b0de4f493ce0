//! Log output for the `rescue` binary
//!
//! Events go to stderr so they never mix with command output on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Picks the filter: `RUST_LOG` if set, else `debug` when verbose, else `warn`
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// Installs the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let result = tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!("Logging initialized: verbose={}", verbose);
    }
}
