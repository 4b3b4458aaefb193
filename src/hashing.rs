//! Hashing - SHA-256 over emitted files and the build report
//!
//! Hashes make two runs comparable file by file.

use serde::Serialize;
use sha2::{Digest, Sha256};

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Hash of `manifest` serialized as compact JSON.
///
/// Going through `serde_json::Value` puts object keys in sorted order, so
/// field order in the source type does not affect the hash.
pub fn compute_manifest_hash<T: Serialize>(manifest: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(manifest)?;
    Ok(sha256_hex(serde_json::to_string(&value)?.as_bytes()))
}
