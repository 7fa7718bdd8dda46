//! Domain error taxonomy.

use thiserror::Error;

/// Failures surfaced by the RSVP service.
///
/// A corrupt store file is not represented here: it loads as an empty
/// collection (see [`crate::store::LoadOutcome`]).
#[derive(Debug, Error)]
pub enum RsvpError {
    /// A required field is missing or could not be interpreted.
    #[error("{0}")]
    InvalidInput(String),

    /// The request carried no valid session and no matching admin key.
    #[error("forbidden")]
    Forbidden,

    /// No entry has the given id.
    #[error("entry {0} not found")]
    NotFound(String),

    /// Reading or replacing the store file failed.
    #[error("storage I/O failure: {0}")]
    StorageIo(#[from] std::io::Error),

    /// The collection could not be serialized.
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = RsvpError> = std::result::Result<T, E>;
