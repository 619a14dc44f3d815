//! Store file format - Encode/decode a whole mapping to bytes
//!
//! Layout: one JSON header line, a `\n`, then a MessagePack array of
//! `[key, value]` pairs. The header carries the entry count and an xxh3
//! checksum of the body so that truncated or edited files are rejected on
//! load. MessagePack keeps every float (NaN and infinities included) and
//! accepts non-string map keys anywhere inside a value.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;

use crate::cache::meta::{StoreHeader, STORE_FORMAT, STORE_VERSION};
use crate::core::util::hash_bytes;

/// Reasons a mapping could not be turned into store file bytes
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("cannot encode header: {0}")]
    Header(#[source] serde_json::Error),

    #[error("cannot encode entries: {0}")]
    Body(#[source] rmp_serde::encode::Error),
}

/// Reasons a byte buffer is not a valid store file
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("missing header line")]
    MissingHeader,

    #[error("invalid header: {0}")]
    Header(#[source] serde_json::Error),

    #[error("unrecognized format tag '{0}'")]
    Format(String),

    #[error("unsupported format version {0}")]
    Version(u32),

    #[error("checksum mismatch (header {expected}, body {found})")]
    Checksum { expected: String, found: String },

    #[error("invalid body: {0}")]
    Body(#[source] rmp_serde::decode::Error),

    #[error("header declares {expected} entries but body holds {found}")]
    Count { expected: usize, found: usize },
}

/// Encode the full mapping into store file bytes
pub fn encode<K, V>(data: &HashMap<K, V>) -> Result<Vec<u8>, EncodeError>
where
    K: Serialize,
    V: Serialize,
{
    let pairs: Vec<(&K, &V)> = data.iter().collect();
    let body = rmp_serde::to_vec_named(&pairs).map_err(EncodeError::Body)?;

    let header = StoreHeader::new(pairs.len(), hash_bytes(&body));
    let mut out = serde_json::to_vec(&header).map_err(EncodeError::Header)?;
    out.push(b'\n');
    out.extend_from_slice(&body);
    Ok(out)
}

/// Decode store file bytes back into a mapping
pub fn decode<K, V>(bytes: &[u8]) -> Result<HashMap<K, V>, DecodeError>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    // The header is compact JSON, so its first newline ends it
    let split = bytes
        .iter()
        .position(|&b| b == b'\n')
        .ok_or(DecodeError::MissingHeader)?;
    let (header_bytes, body) = (&bytes[..split], &bytes[split + 1..]);

    let header: StoreHeader = serde_json::from_slice(header_bytes).map_err(DecodeError::Header)?;
    if header.format != STORE_FORMAT {
        return Err(DecodeError::Format(header.format));
    }
    if header.version != STORE_VERSION {
        return Err(DecodeError::Version(header.version));
    }

    let found = hash_bytes(body);
    if found != header.checksum {
        return Err(DecodeError::Checksum {
            expected: header.checksum,
            found,
        });
    }

    let pairs: Vec<(K, V)> = rmp_serde::from_slice(body).map_err(DecodeError::Body)?;
    if pairs.len() != header.entries {
        return Err(DecodeError::Count {
            expected: header.entries,
            found: pairs.len(),
        });
    }

    // Duplicate keys never come out of `encode`; if present, last one wins
    Ok(pairs.into_iter().collect())
}
