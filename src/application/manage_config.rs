//! Config management use case

use crate::error::{Result, TodoError};
use crate::infrastructure::storage::validate_key;
use crate::infrastructure::{Config, FileSystemRepository, Store, TodoRepository};

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "name" => Ok(config.name.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TodoError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: name, created",
                key
            ))),
        }
    }

    /// Set a config value. Switching `name` creates the collection if it does not exist.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "name" => {
                validate_key(value)?;
                config.name = value.to_string();
            }
            "created" => {
                return Err(TodoError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TodoError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: name",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Store::open(&config.name, self.repository.storage())?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
