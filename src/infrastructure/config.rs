//! Configuration management

use crate::error::{Result, TodoError};
use crate::infrastructure::storage::validate_key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Collection name used when none is configured
pub const DEFAULT_STORE_NAME: &str = "todos";

/// Environment variable that overrides the configured collection name
pub const STORE_ENV_VAR: &str = "TODOS_STORE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Storage key of the active collection
    #[serde(default = "default_name")]
    pub name: String,
    pub created: DateTime<Utc>,
}

fn default_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

impl Config {
    /// Create a new config for the given collection name
    pub fn new(name: &str) -> Result<Self> {
        validate_key(name)?;
        Ok(Config {
            name: name.to_string(),
            created: Utc::now(),
        })
    }

    /// Load config from .todos/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".todos").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TodoError::NotTodoDirectory(path.to_path_buf())
            } else {
                TodoError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TodoError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .todos/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let todos_dir = path.join(".todos");
        let config_path = todos_dir.join("config.toml");

        if !todos_dir.exists() {
            fs::create_dir(&todos_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the collection name, checking the environment first
    pub fn store_name(&self) -> String {
        std::env::var(STORE_ENV_VAR)
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.name.clone())
    }
}
