//! Generator configuration files.
//!
//! A configuration file is YAML (`postman2go.yaml`) unless its extension is
//! `.json`. Relative `postman_file` and `test_file` paths are resolved
//! against the directory holding the configuration file.

use std::path::{Path, PathBuf};

use postman2go_domain::GeneratorConfig;

use crate::serialization::{SerializationError, from_json_bytes};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "postman2go.yaml";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Config path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing failed.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing failed.
    #[error("invalid JSON config: {0}")]
    Json(#[from] SerializationError),
}

/// Loads generator configurations from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigRepository;

impl ConfigRepository {
    /// Creates a new config repository.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Loads and resolves a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self, path: &Path) -> Result<GeneratorConfig, ConfigError> {
        let content = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = if is_json(path) {
            from_json_bytes::<GeneratorConfig>(&content)?
        } else {
            serde_yaml::from_slice::<GeneratorConfig>(&content)?
        };

        if let Some(base) = path.parent() {
            config.postman_file = resolve(base, &config.postman_file);
            config.test_file = resolve(base, &config.test_file);
        }
        Ok(config)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || path.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
