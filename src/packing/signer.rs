//! Entry signing
//!
//! The signature scheme is a consumed primitive: this module asks a
//! signer for bytes over a prepared hash and attaches them verbatim,
//! without interpreting or verifying the material.

use ed25519_dalek::{Signer as _, SigningKey};
use std::fs;
use std::path::Path;

use crate::error::SigningError;

/// Consumed contract: produce signature bytes over a prepared hash.
pub trait Signer {
    fn sign(&self, hash: &[u8]) -> Result<Vec<u8>, SigningError>;
}

/// Ed25519 signer over a fixed 32-byte seed.
pub struct KeySigner {
    key: SigningKey,
}

impl KeySigner {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            key: SigningKey::from_bytes(&seed),
        }
    }

    /// Load the signing identity from a hex-encoded 32-byte seed file.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SigningError> {
        let text = fs::read_to_string(path)?;
        let bytes =
            hex::decode(text.trim()).map_err(|e| SigningError::InvalidKey(e.to_string()))?;
        let seed: [u8; 32] = bytes
            .try_into()
            .map_err(|_| SigningError::InvalidKey("seed must be 32 bytes".to_string()))?;
        Ok(Self::from_seed(seed))
    }
}

impl Signer for KeySigner {
    fn sign(&self, hash: &[u8]) -> Result<Vec<u8>, SigningError> {
        Ok(self.key.sign(hash).to_bytes().to_vec())
    }
}
