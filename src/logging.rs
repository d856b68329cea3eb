//! Diagnostic logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr so `--json` output on stdout stays parseable. The
/// default level is `warn`, `debug` with `verbose`; `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
