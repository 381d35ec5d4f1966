//! File-backed adapters.

mod config_repository;
mod file_system;

pub use config_repository::{ConfigError, ConfigRepository, DEFAULT_CONFIG_FILE};
pub use file_system::StdFileSystem;
