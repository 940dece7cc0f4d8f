//! Tracing setup
//!
//! Diagnostics go to stderr so they never interleave with command output.
//! `RUST_LOG` overrides the default `expense_tracker=warn` filter.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter directive when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "expense_tracker=warn";

/// Initializes the global tracing subscriber; later calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
