//! Guest RSVP collection backend.

pub mod admin;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod rsvp;
pub mod store;

pub use config::RsvpConfig;
pub use error::RsvpError;
pub use http::HttpServer;
pub use rsvp::RsvpService;
