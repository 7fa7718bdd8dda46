//! Admin authorization subsystem.
//!
//! A request is privileged when it carries a live login session or presents
//! the shared admin key. The HTTP layer gathers both into a [`RequestAuth`]
//! per request; the service hands it to the [`AdminGate`] before any
//! privileged operation.

pub mod gate;
pub mod session;

pub use gate::{AdminGate, AdminGrant, RequestAuth};
pub use session::{SessionId, SessionStore};
