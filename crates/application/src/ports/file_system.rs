//! File system abstraction port.

use std::path::{Path, PathBuf};

/// Error type for file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// File not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FileSystemError {
    /// Maps an IO error for `path` onto the matching variant.
    #[must_use]
    pub fn from_io(path: &Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io(error),
        }
    }
}

/// Abstraction over the file operations the generator performs.
///
/// This trait allows substituting an in-memory file system in tests.
pub trait FileSystem {
    /// Reads a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError>;

    /// Writes bytes to a file, creating it (and missing parents) if necessary
    /// and truncating any previous content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError>;

    /// Removes a file.
    ///
    /// # Errors
    ///
    /// Returns [`FileSystemError::NotFound`] if there is no such file.
    fn remove_file(&self, path: &Path) -> Result<(), FileSystemError>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        (**self).read_file_string(path)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        (**self).write_file(path, contents)
    }

    fn remove_file(&self, path: &Path) -> Result<(), FileSystemError> {
        (**self).remove_file(path)
    }
}
