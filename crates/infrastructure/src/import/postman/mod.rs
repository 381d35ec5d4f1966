//! Postman Import Module
//!
//! This module reads Postman Environment exports so their values can feed
//! placeholder substitution.

pub mod environment_types;
pub mod importer;

pub use environment_types::{PostmanEnvVariable, PostmanEnvironment};
pub use importer::{ImportError, ImportFormat, PostmanImporter};
