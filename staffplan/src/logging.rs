// src/logging.rs
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "STAFFPLAN_LOG";

/// Installs the global subscriber, writing to stderr.
///
/// `STAFFPLAN_LOG` (e.g. `staffplan=debug`) takes precedence; otherwise
/// `verbosity` picks warn, info or debug. Later calls do nothing.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let fallback = match verbosity {
            0 => "staffplan=warn",
            1 => "staffplan=info",
            _ => "staffplan=debug",
        };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}
