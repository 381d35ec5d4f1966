//! Import Module
//!
//! This module provides functionality to read data from external formats.

pub mod postman;

pub use postman::{ImportError, ImportFormat, PostmanEnvironment, PostmanImporter};
