//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI arguments (--port)
//!     → EchoConfig::default() (all fields have defaults)
//!     → with_port() (apply CLI override)
//!     → shared immutably with the server and startup gate
//! ```
//!
//! # Design Decisions
//! - Config is immutable once constructed; there is no reload path
//! - All fields have defaults so the server runs with zero flags
//! - The listener and the startup probe are configured separately:
//!   the listener binds all interfaces, the probe targets loopback

pub mod schema;

pub use schema::EchoConfig;
pub use schema::ListenerConfig;
pub use schema::ProbeConfig;
