//! OS signal handling.
//!
//! # Responsibilities
//! - Register the interrupt handler (Ctrl-C / SIGINT)
//! - Translate the signal into a shutdown trigger

use crate::lifecycle::Shutdown;

/// Wait for an interrupt and trigger the shutdown coordinator.
pub async fn shutdown_on_interrupt(shutdown: Shutdown) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install interrupt handler");
        return;
    }

    tracing::info!("Shutting down the server...");
    shutdown.trigger();
}
