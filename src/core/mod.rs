//! Core module - Shared helpers
//!
//! This module provides:
//! - File size lookup
//! - Body hashing

pub mod util;
