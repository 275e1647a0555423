//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Build config → Probe port → occupied: abort with exit code 1
//!                               → free: bind listener, serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     Ctrl-C received → trigger coordinator → listener closes → exit 0
//! ```
//!
//! # Design Decisions
//! - The probe gates startup before any socket is bound
//! - Shutdown is a broadcast so tests can trigger it without a signal

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{ensure_port_free, StartupError};
