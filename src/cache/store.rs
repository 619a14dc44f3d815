//! Cache store - In-memory mapping mirrored to a single file

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt::Debug;
use std::fs::File;
use std::hash::Hash;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::cache::format;
use crate::cache::options::CacheOptions;
use crate::core::util::file_size;
use crate::error::{CacheError, Result};

/// Key-value cache whose full contents live in memory and in one file.
///
/// The file is read once by [`Cache::load`] when the cache is opened and
/// rewritten completely by [`Cache::flush`]. With autosync enabled every
/// effective mutation flushes immediately; otherwise the file only changes
/// on an explicit flush. Dropping a cache does not flush it.
#[derive(Debug)]
pub struct Cache<K, V> {
    path: PathBuf,
    data: HashMap<K, V>,
    autosync: bool,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Serialize + DeserializeOwned,
    V: Serialize + DeserializeOwned,
{
    /// Open the cache backed by `path`, creating an empty store file if
    /// nothing (or an empty file) is there yet.
    pub fn open(path: impl Into<PathBuf>, autosync: bool) -> Result<Self> {
        let mut cache = Self {
            path: path.into(),
            data: HashMap::new(),
            autosync,
        };
        cache.load()?;
        Ok(cache)
    }

    /// Open with the default options (`datastore.pkl`, no autosync)
    pub fn open_default() -> Result<Self> {
        CacheOptions::default().open()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Insert or overwrite `key`.
    ///
    /// The in-memory write always happens. An error is only returned when
    /// autosync is on and the following flush fails; the new value stays in
    /// memory in that case.
    pub fn set(&mut self, key: K, value: V) -> Result<()> {
        self.data.insert(key, value);
        trace!(path = %self.path.display(), entries = self.data.len(), "set");
        self.sync()
    }

    /// Look up `key`. Any stored value is returned, including `0`, `""`,
    /// `false` or empty collections.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.data
            .get(key)
            .ok_or_else(|| CacheError::key_not_found(key))
    }

    /// Whether `key` is present, without producing an error
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.contains_key(key)
    }

    /// Remove `key` if present. Removing a missing key is a no-op and never
    /// triggers a flush.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.data.remove(key).is_none() {
            return Ok(());
        }
        trace!(path = %self.path.display(), entries = self.data.len(), "delete");
        self.sync()
    }

    /// Hydrate from the backing file.
    ///
    /// A file with content replaces the in-memory mapping. A missing or
    /// zero-length file resets the mapping to empty and writes it out.
    pub fn load(&mut self) -> Result<()> {
        let size = file_size(&self.path).map_err(|e| CacheError::storage(&self.path, e))?;

        match size {
            Some(len) if len > 0 => {
                let bytes = self.read_file()?;
                self.data = format::decode(&bytes)
                    .map_err(|e| CacheError::corrupt(&self.path, e.to_string()))?;
                debug!(
                    path = %self.path.display(),
                    entries = self.data.len(),
                    "loaded store"
                );
                Ok(())
            }
            _ => {
                self.data.clear();
                debug!(path = %self.path.display(), "initializing empty store");
                self.flush()
            }
        }
    }

    /// Rewrite the backing file with the full current mapping
    pub fn flush(&self) -> Result<()> {
        let bytes = format::encode(&self.data).map_err(|e| {
            CacheError::storage(&self.path, io::Error::new(io::ErrorKind::InvalidData, e))
        })?;
        self.write_file(&bytes)?;
        debug!(
            path = %self.path.display(),
            entries = self.data.len(),
            bytes = bytes.len(),
            "flushed store"
        );
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        if !self.autosync {
            return Ok(());
        }
        self.flush().inspect_err(|e| {
            warn!(error = %e, "autosync flush failed");
        })
    }

    fn read_file(&self) -> Result<Vec<u8>> {
        let mut file = File::open(&self.path).map_err(|e| CacheError::storage(&self.path, e))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| CacheError::storage(&self.path, e))?;
        Ok(bytes)
    }

    fn write_file(&self, bytes: &[u8]) -> Result<()> {
        let mut file =
            File::create(&self.path).map_err(|e| CacheError::storage(&self.path, e))?;
        file.write_all(bytes)
            .and_then(|_| file.flush())
            .map_err(|e| CacheError::storage(&self.path, e))
    }
}

impl<K, V> Cache<K, V> {
    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether mutations flush immediately
    pub fn autosync(&self) -> bool {
        self.autosync
    }

    /// Turn autosync on or off; takes effect from the next mutation
    pub fn set_autosync(&mut self, autosync: bool) {
        self.autosync = autosync;
    }

    /// Iterate over entries in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.data.iter()
    }

    /// Iterate over keys in arbitrary order
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.data.keys()
    }
}

impl<'a, K, V> IntoIterator for &'a Cache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
