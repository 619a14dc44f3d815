//! kvstash - A dictionary that survives process restarts
//!
//! A [`Cache`] keeps every entry in memory and mirrors the whole mapping to
//! a single file. The file is read when the cache is opened and rewritten on
//! each flush, or after every mutation when autosync is enabled.
//!
//! ```no_run
//! use kvstash::Cache;
//! use serde_json::json;
//!
//! let mut cache: Cache<String, serde_json::Value> = Cache::open("t.db", false)?;
//! cache.set("foo".into(), json!("bar"))?;
//! cache.flush()?;
//!
//! let reopened: Cache<String, serde_json::Value> = Cache::open("t.db", false)?;
//! assert_eq!(reopened.get("foo")?, &json!("bar"));
//! assert_eq!(reopened.len(), 1);
//! # Ok::<(), kvstash::CacheError>(())
//! ```
//!
//! Single-process only: two caches pointed at the same file will overwrite
//! each other's flushes.

pub mod cache;
pub mod core;
pub mod error;

pub use cache::options::{CacheOptions, DEFAULT_PATH};
pub use cache::store::Cache;
pub use error::{CacheError, Result};

/// Cache holding heterogeneous JSON values under string keys
pub type DynCache = Cache<String, serde_json::Value>;
