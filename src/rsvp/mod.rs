//! RSVP domain: entry model, input normalization and the service that ties
//! them to the store and the admin gate.

pub mod entry;
pub mod normalize;
pub mod service;

pub use entry::{EntryDraft, RsvpEntry, Status};
pub use normalize::normalize;
pub use service::{RsvpService, Stats};
