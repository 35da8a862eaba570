//! Cryptographic primitives for the Abyss client.
//!
//! This module provides:
//! - Ed25519 key generation and base64 wire encodings
//! - Ed25519 signing and verification

pub mod keys;
pub mod signing;

pub use keys::KeyMaterial;
