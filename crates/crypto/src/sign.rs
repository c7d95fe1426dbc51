use ed25519_dalek::{Signature, Signer as DalekSigner, Verifier, VerifyingKey};

use relaymesh_core::{RelayMeshError, Result};

use crate::keys::ClientKeypair;

/// Opaque byte-signing capability consumed by the relay pipeline.
///
/// The pipeline never interprets the signature format; it only forwards the
/// hex string onto the wire. Remote or hardware-backed signers implement this
/// the same way a local keypair does.
pub trait Signer: Send + Sync {
    /// Sign the given message, returning the signature as lowercase hex
    fn sign(&self, msg: &[u8]) -> Result<String>;

    /// Public key of this signer as lowercase hex
    fn public_key(&self) -> String;
}

/// Local Ed25519 signer backed by a [`ClientKeypair`]
pub struct Ed25519Signer {
    keypair: ClientKeypair,
}

impl Ed25519Signer {
    pub fn new(keypair: ClientKeypair) -> Self {
        Self { keypair }
    }

    /// Generate a signer with a fresh random keypair
    pub fn generate() -> Self {
        Self::new(ClientKeypair::generate())
    }

    /// Build a signer from raw secret key bytes, e.g. loaded from a keyfile
    pub fn from_secret_bytes(secret: &[u8; 32]) -> Self {
        Self::new(ClientKeypair::from_secret_bytes(secret))
    }
}

impl Signer for Ed25519Signer {
    fn sign(&self, msg: &[u8]) -> Result<String> {
        let signature: Signature = self.keypair.signing_key.sign(msg);
        Ok(hex::encode(signature.to_bytes()))
    }

    fn public_key(&self) -> String {
        self.keypair.public_key_hex()
    }
}

/// Verify a hex-encoded Ed25519 signature over a message
pub fn verify_signature(pubkey_hex: &str, msg: &[u8], signature_hex: &str) -> Result<bool> {
    let pubkey_bytes: [u8; 32] = hex::decode(pubkey_hex)
        .map_err(|e| RelayMeshError::Signing(format!("invalid public key hex: {e}")))?
        .try_into()
        .map_err(|_| RelayMeshError::Signing("invalid public key length".to_string()))?;
    let signature_bytes: [u8; 64] = hex::decode(signature_hex)
        .map_err(|e| RelayMeshError::Signing(format!("invalid signature hex: {e}")))?
        .try_into()
        .map_err(|_| RelayMeshError::Signing("invalid signature length".to_string()))?;

    let verifying_key = VerifyingKey::from_bytes(&pubkey_bytes)
        .map_err(|e| RelayMeshError::Signing(format!("invalid public key: {e}")))?;
    let signature = Signature::from_bytes(&signature_bytes);

    Ok(verifying_key.verify(msg, &signature).is_ok())
}
