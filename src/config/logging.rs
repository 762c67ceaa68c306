//! Logging setup
//!
//! Installs a `tracing` subscriber that writes to stderr so that log lines
//! never interleave with the menu on stdout.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT_TRACING: Once = Once::new();

/// Filter used when neither `RUST_LOG`, `-v` nor the settings file say otherwise
pub const DEFAULT_LOG_FILTER: &str = "portfolio_cli=warn";

/// Pick the filter directive for a verbosity level and configured filter
///
/// Each `-v` overrides the configured filter: one gives `info`, two or more
/// give `debug`.
pub fn filter_directive(verbosity: u8, configured: Option<&str>) -> String {
    match verbosity {
        0 => configured.unwrap_or(DEFAULT_LOG_FILTER).to_string(),
        1 => "portfolio_cli=info".to_string(),
        _ => "portfolio_cli=debug".to_string(),
    }
}

/// Initializes the global tracing subscriber. `RUST_LOG` wins when set.
pub fn init(verbosity: u8, configured: Option<&str>) {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity, configured)));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();

        tracing::debug!("tracing initialized");
    });
}
