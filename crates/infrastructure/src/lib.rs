//! postman2go Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the file loaders.

pub mod codegen;
pub mod import;
pub mod persistence;
pub mod serialization;

pub use codegen::GoTestGenerator;
pub use import::{ImportError, ImportFormat, PostmanEnvironment, PostmanImporter};
pub use persistence::{ConfigError, ConfigRepository, DEFAULT_CONFIG_FILE, StdFileSystem};
pub use serialization::{SerializationError, from_json_bytes};
