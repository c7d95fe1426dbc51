//! RelayMesh Crypto
//!
//! Canonical SHA3-256 hashing for relay proofs and the Ed25519 signing
//! primitives used to produce them.

mod hash;
mod keys;
mod sign;

pub use hash::*;
pub use keys::*;
pub use sign::*;
