//! Data structures for session establishment.

use serde::{Deserialize, Serialize};

/// Opaque session credential issued by the service.
///
/// No internal structure is assumed; the token is stored and replayed
/// verbatim for validate/destroy calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(pub String);

impl SessionToken {
    /// Return the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Progress of one handshake attempt.
///
/// `Authenticated` is terminal; any step error ends the attempt (the
/// session is consumed, so there is no observable `Failed` state to leave
/// behind). Attempts are never retried internally because challenges are
/// single-use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    Idle,
    ChallengeRequested,
    ChallengeReceived,
    ResponseSubmitted,
    Authenticated,
}

impl HandshakeState {
    /// Return a stable string tag.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Idle => "idle",
            Self::ChallengeRequested => "challenge_requested",
            Self::ChallengeReceived => "challenge_received",
            Self::ResponseSubmitted => "response_submitted",
            Self::Authenticated => "authenticated",
        }
    }
}
