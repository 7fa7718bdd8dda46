//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::RsvpConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `admin.key`.
pub const ENV_ADMIN_KEY: &str = "RSVP_ADMIN_KEY";
/// Environment variable overriding `storage.data_file`.
pub const ENV_DATA_FILE: &str = "RSVP_DATA_FILE";
/// Environment variable overriding `listener.bind_address`.
pub const ENV_BIND: &str = "RSVP_BIND";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply environment
/// overrides, then validate.
pub fn load_config(path: Option<&Path>) -> Result<RsvpConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => RsvpConfig::default(),
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply overrides from a variable lookup. Empty values are ignored.
pub fn apply_overrides<F>(config: &mut RsvpConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(key) = get(ENV_ADMIN_KEY) {
        config.admin.key = key;
    }
    if let Some(file) = get(ENV_DATA_FILE) {
        config.storage.data_file = file;
    }
    if let Some(bind) = get(ENV_BIND) {
        config.listener.bind_address = bind;
    }
}
