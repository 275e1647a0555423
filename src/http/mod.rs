//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, one handler for every method and path)
//!     → echo.rs (parse query/headers/body into a RequestDetails)
//!     → record.rs (serialize the record, render the console block)
//!     → 200 application/json back to the client
//! ```

pub mod echo;
pub mod record;
pub mod server;

pub use record::{ParamValue, RequestDetails};
pub use server::EchoServer;
