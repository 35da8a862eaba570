//! Session establishment and lifecycle.
//!
//! `handshake` drives the challenge-response exchange that turns a private
//! key into a session token; `lifecycle` validates and destroys tokens.

pub mod handshake;
pub mod lifecycle;
pub mod types;

pub use handshake::AuthSession;
pub use lifecycle::{destroy, validate, Validation};
pub use types::{HandshakeState, SessionToken};
