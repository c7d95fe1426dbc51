//! Canonical hashing
//!
//! Every hash the network verifies is SHA3-256 over a compact JSON
//! serialization. Determinism comes from serializing explicit record structs:
//! serde emits struct fields in declaration order, so the declared order of a
//! hash-input struct IS the canonical field order. Never hash a map-backed
//! value whose key order is unspecified.

use serde::Serialize;
use sha3::{Digest, Sha3_256};

use relaymesh_core::Result;

/// SHA3-256 digest of raw bytes, as lowercase hex
pub fn sha3_hex(data: &[u8]) -> String {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Hash a structured value in its canonical form.
///
/// Serializes `value` with compact JSON (no whitespace, struct fields in
/// declaration order) and returns the SHA3-256 digest as lowercase hex.
pub fn hash_canonical<T: Serialize>(value: &T) -> Result<String> {
    let canonical = serde_json::to_string(value)?;
    Ok(sha3_hex(canonical.as_bytes()))
}
