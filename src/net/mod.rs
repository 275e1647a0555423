//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     probe.rs (TCP occupancy check against the configured port)
//!     → free: main binds the listener and serving begins
//!     → occupied: startup aborts before any socket is opened
//! ```
//!
//! # Design Decisions
//! - The probe is a plain connect, never a bind: it must not race the
//!   listener it is gating
//! - An inconclusive probe counts as "free" so broken name resolution
//!   cannot keep the server from starting

pub mod probe;

pub use probe::is_port_in_use;
