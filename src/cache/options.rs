//! Cache construction options

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::hash::Hash;
use std::path::PathBuf;

use crate::cache::store::Cache;
use crate::error::Result;

/// Default backing file name
pub const DEFAULT_PATH: &str = "datastore.pkl";

/// Parameters used to open a [`Cache`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOptions {
    /// Backing file location
    pub path: PathBuf,

    /// Flush after every effective mutation
    pub autosync: bool,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            autosync: false,
        }
    }
}

impl CacheOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_autosync(mut self, autosync: bool) -> Self {
        self.autosync = autosync;
        self
    }

    /// Open (and load) a cache with these options
    pub fn open<K, V>(&self) -> Result<Cache<K, V>>
    where
        K: Eq + Hash + Serialize + DeserializeOwned,
        V: Serialize + DeserializeOwned,
    {
        Cache::open(self.path.clone(), self.autosync)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let options = CacheOptions::default();
        assert_eq!(options.path, PathBuf::from("datastore.pkl"));
        assert!(!options.autosync);
    }

    #[test]
    fn test_builder() {
        let options = CacheOptions::new("a.db")
            .with_autosync(true)
            .with_path("b.db");
        assert_eq!(options.path, PathBuf::from("b.db"));
        assert!(options.autosync);
    }

    #[test]
    fn test_open() {
        let temp = tempdir().unwrap();
        let options = CacheOptions::new(temp.path().join("opts.db")).with_autosync(true);

        let cache: Cache<String, Value> = options.open().unwrap();
        assert!(cache.autosync());
        assert_eq!(cache.path(), options.path.as_path());
        assert!(options.path.exists());
    }
}
