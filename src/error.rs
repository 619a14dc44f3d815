//! Error types for cache operations

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, CacheError>;

/// Everything that can go wrong while using a [`Cache`](crate::Cache)
#[derive(Debug, Error)]
pub enum CacheError {
    /// Lookup of a key that is not in the cache
    #[error("key not found: {key}")]
    KeyNotFound {
        /// Debug rendering of the requested key
        key: String,
    },

    /// The backing file exists but does not decode into a mapping
    #[error("corrupt store file {}: {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },

    /// Reading or writing the backing file failed
    #[error("storage error on {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CacheError {
    pub fn key_not_found(key: impl std::fmt::Debug) -> Self {
        CacheError::KeyNotFound {
            key: format!("{:?}", key),
        }
    }

    pub fn corrupt(path: &Path, reason: impl Into<String>) -> Self {
        CacheError::CorruptStore {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn storage(path: &Path, source: io::Error) -> Self {
        CacheError::Storage {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::KeyNotFound { .. })
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, CacheError::CorruptStore { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, CacheError::Storage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_message() {
        let err = CacheError::key_not_found("foo");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "key not found: \"foo\"");
    }

    #[test]
    fn test_corrupt_message_includes_path() {
        let err = CacheError::corrupt(Path::new("/tmp/t.db"), "missing header");
        assert!(err.is_corrupt());
        let msg = err.to_string();
        assert!(msg.contains("/tmp/t.db"));
        assert!(msg.contains("missing header"));
    }

    #[test]
    fn test_storage_keeps_io_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = CacheError::storage(Path::new("t.db"), io_err);
        assert!(err.is_storage());
        assert!(!err.is_not_found());

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }
}
