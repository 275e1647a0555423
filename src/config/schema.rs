//! Configuration schema definitions.
//!
//! All types derive Serde traits and carry defaults so a bare
//! `EchoConfig::default()` is a fully working configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5550;

/// Root configuration for the echo server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EchoConfig {
    /// Listener configuration (bind host, port).
    pub listener: ListenerConfig,

    /// Startup port probe settings.
    pub probe: ProbeConfig,
}

impl EchoConfig {
    /// Return this configuration with the listening port replaced.
    pub fn with_port(mut self, port: u16) -> Self {
        self.listener.port = port;
        self
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Host to bind (all interfaces by default).
    pub host: String,

    /// Port to listen on.
    pub port: u16,
}

impl ListenerConfig {
    /// Full bind address, e.g. `"0.0.0.0:5550"`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Startup port probe configuration.
///
/// The probe connects to loopback rather than the bind address because a
/// wildcard bind host is not a connectable target.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Host the occupancy probe connects to.
    pub host: String,

    /// Probe connect timeout in seconds.
    pub timeout_secs: u64,
}

impl ProbeConfig {
    /// Probe timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            timeout_secs: 1,
        }
    }
}
