//! Application layer - Use cases and orchestration

pub mod bulk;
pub mod init;
pub mod manage_config;
pub mod model;

pub use bulk::{clear_completed, toggle_all};
pub use manage_config::ConfigService;
pub use model::Model;
