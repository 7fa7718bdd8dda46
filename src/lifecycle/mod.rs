//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → terminate() resolves
//!     → HttpServer::run stops accepting → drains in-flight requests → exit
//! ```
//!
//! The server takes its shutdown trigger as a plain future, so tests can
//! stop it with a channel instead of a signal.

pub mod signals;
