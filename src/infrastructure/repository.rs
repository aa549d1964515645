//! File system repository for a todos workspace

use crate::error::{Result, TodoError};
use crate::infrastructure::storage::{FileStorage, LocalStorage};
use crate::infrastructure::store::Store;
use crate::infrastructure::Config;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a workspace root
pub const ROOT_ENV_VAR: &str = "TODOS_ROOT";

/// Abstract repository for workspace operations
pub trait TodoRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .todos/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .todos/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .todos directory exists
    fn is_initialized(&self) -> bool;

    /// Create .todos directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TodoRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover workspace root by walking up from current directory.
    /// TODOS_ROOT takes precedence over discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV_VAR) {
            let path = PathBuf::from(root_path);
            if Self::has_todos_dir(&path) {
                debug!("using {}={}", ROOT_ENV_VAR, path.display());
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TodoError::Config(format!(
                    "{} is set to '{}' but no .todos directory found. \
                    Run 'todos init' in that directory or unset {}.",
                    ROOT_ENV_VAR,
                    path.display(),
                    ROOT_ENV_VAR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_todos_dir(&current) {
                debug!("discovered workspace at {}", current.display());
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TodoError::NotTodoDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_todos_dir(path: &Path) -> bool {
        path.join(".todos").is_dir()
    }

    /// Directory holding one JSON file per collection
    pub fn storage_dir(&self) -> PathBuf {
        self.root.join(".todos").join("storage")
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.storage_dir())
    }

    /// Open the collection selected by the config (or TODOS_STORE)
    pub fn open_store(&self) -> Result<Store<FileStorage>> {
        let config = self.load_config()?;
        Store::open(&config.store_name(), self.storage())
    }

    /// Names of every collection in this workspace
    pub fn list_stores(&self) -> Result<Vec<String>> {
        self.storage().keys()
    }
}

impl TodoRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_todos_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let todos_dir = self.root.join(".todos");

        if todos_dir.exists() {
            return Err(TodoError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&todos_dir)?;
        fs::create_dir(self.storage_dir())?;
        Ok(())
    }
}
