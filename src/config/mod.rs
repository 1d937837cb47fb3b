//! Storage configuration for the bind registry.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}

/// Configuration for a bind store instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindStoreConfig {
    /// Path where the store keeps its data.
    pub storage_path: PathBuf,
}

impl Default for BindStoreConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("data"),
        }
    }
}

impl BindStoreConfig {
    /// Create a configuration with the specified storage path.
    pub fn new(storage_path: PathBuf) -> Self {
        Self { storage_path }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "storage_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a bind store configuration from a TOML file.
pub fn load_bind_config(path: &Path) -> Result<BindStoreConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: BindStoreConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
