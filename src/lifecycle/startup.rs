//! Startup gating.
//!
//! # Responsibilities
//! - Probe the configured port before anything binds
//! - Turn an occupied port into the one fatal startup error

use thiserror::Error;

use crate::config::EchoConfig;
use crate::net::probe::is_port_in_use;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Something is already listening on the requested port.
    #[error("Port {0} is already in use")]
    PortInUse(u16),
}

/// Verify the configured port is free to bind.
///
/// Runs a single occupancy probe against the probe host. An occupied
/// port is the only failure; an inconclusive probe lets startup proceed.
pub async fn ensure_port_free(config: &EchoConfig) -> Result<(), StartupError> {
    let port = config.listener.port;
    if is_port_in_use(&config.probe.host, port, config.probe.timeout()).await {
        return Err(StartupError::PortInUse(port));
    }
    Ok(())
}
