// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Sets up the logging framework using tracing_subscriber.
/// Reads log level filters from the `RUST_LOG` environment variable and
/// defaults to "info". Selection and token-matching detail is logged at
/// debug, so `RUST_LOG=study_extractor=debug` shows why a section was
/// chosen or skipped.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")); // Default to INFO level

    fmt()
        .with_env_filter(filter)
        .with_target(false) // module targets add noise in a single-crate binary
        .init();

    tracing::debug!("Logging setup complete.");
}
