//! TCP port occupancy probe.
//!
//! # Responsibilities
//! - Single bounded connect attempt to `(host, port)`
//! - Map connection refusal and timeout to "port free"
//! - Map any other socket error to "port free" after logging it

use std::io::ErrorKind;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Check whether something is already listening on `host:port`.
///
/// Performs exactly one connect attempt bounded by `connect_timeout`.
/// A successful connection means the port is occupied. Refusal or a
/// timeout means it is free. Any other socket-level failure (name
/// resolution, unreachable network) is logged and reported as free,
/// so an inconclusive probe never blocks startup.
pub async fn is_port_in_use(host: &str, port: u16, connect_timeout: Duration) -> bool {
    match timeout(connect_timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => false,
        Ok(Err(e)) => {
            tracing::error!(error = %e, host, port, "Socket error when checking port");
            false
        }
        Err(_elapsed) => false,
    }
}
