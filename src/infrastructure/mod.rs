//! Infrastructure layer - Storage and persistence

pub mod config;
pub mod repository;
pub mod storage;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, TodoRepository};
pub use storage::{FileStorage, LocalStorage, MemoryStorage};
pub use store::{Collection, Store};
