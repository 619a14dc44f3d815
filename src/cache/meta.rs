//! Store file header

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format tag written into every store file
pub const STORE_FORMAT: &str = "kvstash";

/// Current store file layout version
pub const STORE_VERSION: u32 = 1;

/// Header line written ahead of the entry body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreHeader {
    /// Format tag, always [`STORE_FORMAT`]
    pub format: String,

    /// Layout version
    pub version: u32,

    /// When the file was written
    pub saved_at: DateTime<Utc>,

    /// Number of entries in the body
    pub entries: usize,

    /// xxh3 hash of the body bytes
    pub checksum: String,
}

impl StoreHeader {
    pub fn new(entries: usize, checksum: impl Into<String>) -> Self {
        Self {
            format: STORE_FORMAT.to_string(),
            version: STORE_VERSION,
            saved_at: Utc::now(),
            entries,
            checksum: checksum.into(),
        }
    }
}
