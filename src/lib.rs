//! Diagnostic HTTP Echo Server Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::schema::EchoConfig;
pub use http::EchoServer;
pub use lifecycle::Shutdown;
