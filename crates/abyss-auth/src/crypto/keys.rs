//! Ed25519 key material and its base64 wire encodings.
//!
//! Private material travels as base64 of either the 32-byte seed alone or
//! 64 bytes formed as seed‖public (the export format of common raw-private
//! exporters). Public material is base64 of the raw 32-byte public key.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ed25519_dalek::{SigningKey, VerifyingKey};
use zeroize::Zeroize;

use crate::error::{AuthError, Result};

/// An Ed25519 key pair in its wire-transmissible form.
///
/// The public key is always derived from the seed. The signing seed is
/// zeroized on drop to prevent private key leakage.
#[derive(Debug)]
pub struct KeyMaterial {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl KeyMaterial {
    /// Generate a new random Ed25519 key pair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut rand::thread_rng());
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Load key material from its base64 private encoding.
    ///
    /// Accepts exactly 32 decoded bytes (the seed) or 64 (seed‖public).
    /// The seed is always the first 32 bytes; an embedded public half is
    /// discarded and recomputed from the seed, never trusted.
    pub fn load(private_b64: &str) -> Result<Self> {
        let mut raw = BASE64
            .decode(private_b64.trim())
            .map_err(|e| AuthError::InvalidEncoding(format!("private key is not valid base64: {e}")))?;

        if raw.len() != 32 && raw.len() != 64 {
            let len = raw.len();
            raw.zeroize();
            return Err(AuthError::InvalidKeyLength(len));
        }

        let mut seed = [0u8; 32];
        seed.copy_from_slice(&raw[..32]);
        raw.zeroize();

        let signing_key = SigningKey::from_bytes(&seed);
        seed.zeroize();
        let verifying_key = signing_key.verifying_key();
        Ok(Self {
            signing_key,
            verifying_key,
        })
    }

    /// Return the private encoding: base64 of the 64-byte seed‖public form.
    pub fn private_key_base64(&self) -> String {
        let mut raw = [0u8; 64];
        raw[..32].copy_from_slice(&self.signing_key.to_bytes());
        raw[32..].copy_from_slice(&self.verifying_key.to_bytes());
        let encoded = BASE64.encode(raw);
        raw.zeroize();
        encoded
    }

    /// Return the public encoding: base64 of the raw 32-byte public key.
    pub fn public_key_base64(&self) -> String {
        BASE64.encode(self.verifying_key.to_bytes())
    }

    /// Return a reference to the signing key.
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Return the verifying (public) key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        // SigningKey stores bytes internally; zeroize via conversion
        let mut bytes = self.signing_key.to_bytes();
        bytes.zeroize();
    }
}
