//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, request id, trace, timeout, body limit)
//!     → request.rs (admin credentials → RequestAuth)
//!     → handlers.rs (call RsvpService)
//!     → response.rs (RsvpError → status code + JSON body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{ADMIN_KEY_HEADER, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
