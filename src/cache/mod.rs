//! Cache module - In-memory key-value store persisted to one file
//!
//! Provides:
//! - The cache itself (load, flush, autosync)
//! - Store file format (header + body, integrity checks)
//! - Construction options

pub mod format;
pub mod meta;
pub mod options;
pub mod store;
