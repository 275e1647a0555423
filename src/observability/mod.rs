//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - The subscriber is constructed exactly once, by main, at startup
//! - ANSI colors per level on the console; cosmetic, not a contract

pub mod logging;
