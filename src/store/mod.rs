//! Entry persistence subsystem.
//!
//! # Data Flow
//! ```text
//! service mutation
//!     → lock (one process-wide mutex)
//!     → load (whole collection, corrupt → empty)
//!     → mutate in memory
//!     → save (serialize → <file>.tmp → fsync → rename over <file>)
//!     → unlock
//! ```
//!
//! # Design Decisions
//! - The whole collection is the unit of persistence
//! - Readers never observe a half-written file thanks to the rename
//! - Reads take the same lock so they never interleave with a write

pub mod file;

pub use file::{LoadOutcome, RecordStore};
