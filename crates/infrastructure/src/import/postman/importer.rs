//! Postman Importer - environment files
//!
//! Reads a Postman environment export and merges its enabled values into a
//! generator configuration's variable mapping.

use std::path::Path;

use postman2go_domain::GeneratorConfig;
use thiserror::Error;
use tracing::debug;

use super::environment_types::PostmanEnvironment;
use crate::serialization::from_json_bytes;

/// Import error types
#[derive(Debug, Error)]
pub enum ImportError {
    /// File was not found at the specified path
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// JSON parsing failed
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    /// File is not a Postman environment
    #[error("Invalid Postman format: {0}")]
    InvalidFormat(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Detected import format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// Postman Collection v2.x format
    PostmanCollection,
    /// Postman Environment format
    PostmanEnvironment,
    /// Unknown or unsupported format
    Unknown,
}

/// Loads Postman environment exports.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostmanImporter;

impl PostmanImporter {
    /// Create a new importer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Reads and parses an environment file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, is not JSON, or is not a
    /// Postman environment (a collection passed by mistake is rejected).
    pub fn load_environment(&self, path: &Path) -> Result<PostmanEnvironment, ImportError> {
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ImportError::FileNotFound(path.display().to_string())
            } else {
                ImportError::IoError(e)
            }
        })?;
        self.parse_environment(&bytes)
    }

    /// Parses environment JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not JSON or not a Postman environment.
    pub fn parse_environment(&self, content: &[u8]) -> Result<PostmanEnvironment, ImportError> {
        let json: serde_json::Value =
            from_json_bytes(content).map_err(|e| ImportError::InvalidJson(e.to_string()))?;

        match Self::detect_format(&json) {
            ImportFormat::PostmanEnvironment => serde_json::from_value(json)
                .map_err(|e| ImportError::InvalidFormat(e.to_string())),
            ImportFormat::PostmanCollection => Err(ImportError::InvalidFormat(
                "expected an environment, found a collection".to_string(),
            )),
            ImportFormat::Unknown => Err(ImportError::InvalidFormat(
                "Unknown format: Not a valid Postman Environment".to_string(),
            )),
        }
    }

    /// Merges an environment file into `config`. Values already in the
    /// mapping win.
    ///
    /// Returns the number of variables added.
    ///
    /// # Errors
    ///
    /// See [`PostmanImporter::load_environment`].
    pub fn apply_environment(
        &self,
        config: &mut GeneratorConfig,
        path: &Path,
    ) -> Result<usize, ImportError> {
        let env = self.load_environment(path)?;
        let added = config.merge_fallback_variables(env.enabled_variables());
        debug!(environment = %env.name, added, "merged environment variables");
        Ok(added)
    }

    /// Detect the format of a JSON value
    fn detect_format(json: &serde_json::Value) -> ImportFormat {
        if json.get("info").is_some() && json.get("item").is_some() {
            return ImportFormat::PostmanCollection;
        }

        // Environments have "values" but no "info"
        if json.get("info").is_none() && json.get("values").is_some_and(serde_json::Value::is_array)
        {
            return ImportFormat::PostmanEnvironment;
        }

        ImportFormat::Unknown
    }
}
