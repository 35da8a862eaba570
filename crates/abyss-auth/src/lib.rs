//! Abyss authentication client.
//!
//! A caller proves control of a named identity's Ed25519 private key to a
//! remote Abyss service via a challenge-response handshake, receives an
//! opaque session token, and may later validate or destroy the session, or
//! use the identity's key to provision a new subordinate identity with a
//! delegated privilege level.
//!
//! Keys are caller-supplied or generated fresh at provisioning time and
//! handed back; nothing is persisted here, and every failure is terminal
//! for the issuing call — challenges are single-use, so re-fetching is the
//! caller's explicit responsibility.

pub mod crypto;
pub mod error;
pub mod provision;
pub mod session;
pub mod transport;

// Re-export primary types
pub use crypto::KeyMaterial;
pub use error::{AuthError, Result};
pub use provision::NewIdentity;
pub use session::{AuthSession, HandshakeState, SessionToken, Validation};
pub use transport::TransportClient;
