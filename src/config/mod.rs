//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, apply env overrides)
//!     → validation.rs (semantic checks)
//!     → RsvpConfig (validated, immutable)
//!     → shared via Arc to the HTTP layer and the service
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::RsvpConfig;
pub use schema::{
    AdminConfig, ListenerConfig, ObservabilityConfig, SecurityConfig, StorageConfig, TimeoutConfig,
};
