//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Colored per-level console output with `RUST_LOG` override

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset. Output goes to
/// stdout line-by-line with ANSI level colors, reset after each line.
/// Call once from main; a second call would panic on the global default.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(true))
        .init();
}
