//! Relay proof assembly
//!
//! The servicer recomputes every digest here to check a relay, so the field
//! order of each hash-input struct below is part of the network contract.
//! Declaration order is the canonical order (see `relaymesh_crypto::hash`).

use rand::Rng;
use serde::Serialize;

use relaymesh_core::{Aat, RelayMeta, RelayPayload, Result};
use relaymesh_crypto::hash_canonical;

/// Entropy upper bound: one random draw in `[0, 10^14)` per relay
pub const MAX_ENTROPY: u64 = 100_000_000_000_000;

/// Draw fresh entropy for one relay.
///
/// Entropy must never be reused within a session: two concurrent relays with
/// identical payload and meta would otherwise hash to the same proof.
pub fn generate_entropy<R: Rng>(rng: &mut R) -> u64 {
    rng.gen_range(0..MAX_ENTROPY)
}

/// AAT as hashed into the proof token. The AAT's own signature is excluded:
/// it authenticates the AAT independently of the witnessed token.
#[derive(Serialize)]
struct AatTokenRecord<'a> {
    version: &'a str,
    app_pub_key: &'a str,
    client_pub_key: &'a str,
    signature: &'a str,
}

/// Hash an AAT into its token digest, ignoring the AAT signature field
pub fn hash_aat(aat: &Aat) -> Result<String> {
    hash_canonical(&AatTokenRecord {
        version: &aat.version,
        app_pub_key: &aat.app_pub_key,
        client_pub_key: &aat.client_pub_key,
        signature: "",
    })
}

/// The (payload, meta) pair identifying one relay request
#[derive(Serialize)]
struct RequestHashRecord<'a> {
    payload: &'a RelayPayload,
    meta: &'a RelayMeta,
}

/// Hash the exact payload/meta pair that will be sent in the relay request
pub fn hash_request(payload: &RelayPayload, meta: &RelayMeta) -> Result<String> {
    hash_canonical(&RequestHashRecord { payload, meta })
}

/// Unsigned proof structure. `signature` is always empty here: the servicer
/// rebuilds this exact record to verify the digest before a signature exists.
#[derive(Serialize)]
struct ProofHashRecord<'a> {
    entropy: u64,
    session_block_height: u64,
    servicer_pub_key: &'a str,
    blockchain: &'a str,
    signature: &'a str,
    token: &'a str,
    request_hash: &'a str,
}

/// Produce the digest over the unsigned proof; this is what gets signed.
///
/// `request_hash` is passed in precomputed so the orchestrator hashes the
/// payload/meta pair exactly once and reuses the digest in the final proof.
pub fn proof_bytes(
    entropy: u64,
    session_block_height: u64,
    servicer_pub_key: &str,
    blockchain: &str,
    aat: &Aat,
    request_hash: &str,
) -> Result<String> {
    let token = hash_aat(aat)?;
    hash_canonical(&ProofHashRecord {
        entropy,
        session_block_height,
        servicer_pub_key,
        blockchain,
        signature: "",
        token: &token,
        request_hash,
    })
}
