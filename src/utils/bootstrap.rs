//! Bootstrap utilities for processes embedding the tree.
//!
//! Shared initialization code for binaries and test drivers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LoggingConfig, LOG_ENV_VAR};

/// Initialize tracing with the REDBLACK_LOG environment variable.
///
/// Falls back to the configured filter (default "info") if REDBLACK_LOG is
/// not set or does not parse.
pub fn init_tracing(logging: &LoggingConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
