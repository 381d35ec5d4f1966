//! Application error types

use std::path::PathBuf;

use postman2go_domain::DomainError;
use thiserror::Error;

use crate::ports::FileSystemError;

/// Errors that abort a generation run.
///
/// The first error short-circuits the run; nothing is retried.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The configuration was rejected before any file was touched.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] DomainError),

    /// The collection file is missing or unreadable.
    #[error("failed to read collection {path}: {source}")]
    Read {
        /// Collection path.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: FileSystemError,
    },

    /// The substituted text is not a well-formed collection.
    #[error("failed to decode collection: {0}")]
    Decode(#[source] serde_json::Error),

    /// The test file could not be created or written.
    #[error("failed to write test file {path}: {source}")]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: FileSystemError,
    },
}

/// Result type alias for generation.
pub type GenerateResult<T> = Result<T, GenerateError>;
