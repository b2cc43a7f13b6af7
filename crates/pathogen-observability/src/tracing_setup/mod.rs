//! Tracing setup: structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use pathogen_core::config::ObservabilityConfig;
use pathogen_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with human-readable output.
///
/// Reads the `PATHOGEN_LOG` environment variable for filtering, e.g.
/// `PATHOGEN_LOG=pathogen_network=debug`. Falls back to `info`.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter, false);
}

/// Initialize tracing from config. `PATHOGEN_LOG` still wins when set.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_ascii_lowercase()));
    install(filter, config.json);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // The host application may already own the global subscriber.
        let result = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        if let Err(e) = result {
            eprintln!("pathogen tracing not installed: {e}");
        }
    });
}
