//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, Store, TodoRepository};
use std::fs;
use std::path::Path;

/// Initialize a new todo workspace at the specified path with an empty collection.
pub fn init(path: &Path, name: &str) -> Result<()> {
    // Validate before touching the file system
    let config = Config::new(name)?;

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&config)?;

    Store::open(&config.name, repo.storage())?;

    println!("Initialized todos workspace at {}", path.display());
    println!("Collection: {}", config.name);

    Ok(())
}
