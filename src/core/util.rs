//! Common utilities

use std::io;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

/// Compute the xxh3 hash of bytes as a 16-char hex string
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Get file size in bytes, or `None` if nothing exists at `path`
pub fn file_size(path: &Path) -> io::Result<Option<u64>> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata.len())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
