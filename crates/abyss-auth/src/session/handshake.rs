//! Challenge-response handshake orchestration.
//!
//! One `AuthSession` per attempt: fetch the challenge, sign it, submit the
//! proof, receive the token. Every step failure is terminal for the
//! attempt; retrying with a fresh challenge is the caller's decision.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use log::debug;
use serde::Serialize;

use crate::crypto::signing;
use crate::crypto::KeyMaterial;
use crate::error::{AuthError, Result};
use crate::transport::{unwrap_json_string, TransportClient};

/// Proof submission body. The field name is fixed by the remote service.
#[derive(Serialize)]
struct ProofSubmission {
    #[serde(rename = "Response")]
    response: String,
}

/// One challenge-response handshake attempt for a single username.
///
/// `open` consumes the session, so a completed or failed attempt cannot be
/// replayed against a stale challenge.
pub struct AuthSession<'a> {
    transport: &'a TransportClient,
    username: String,
    state: super::HandshakeState,
}

impl<'a> AuthSession<'a> {
    /// Start a handshake attempt for `username`.
    pub fn new(transport: &'a TransportClient, username: &str) -> Self {
        Self {
            transport,
            username: username.to_string(),
            state: super::HandshakeState::Idle,
        }
    }

    /// Current handshake progress.
    pub fn state(&self) -> super::HandshakeState {
        self.state
    }

    fn user_path(&self) -> String {
        format!("api/user/{}", urlencoding::encode(&self.username))
    }

    /// Fetch this username's challenge and sign it, returning the base64
    /// proof signature.
    ///
    /// This is the trust-establishing half of the handshake, reused by
    /// delegated provisioning where the proof belongs to the authority
    /// identity rather than to a session being opened. The key is loaded
    /// only after a usable challenge is in hand.
    pub async fn prove(&mut self, private_key_b64: &str) -> Result<String> {
        self.state = super::HandshakeState::ChallengeRequested;
        debug!("fetching challenge for {}", self.username);
        let (status, body) = self.transport.get(&self.user_path()).await?;
        if !status.is_success() {
            return Err(AuthError::ChallengeUnavailable {
                status: status.as_u16(),
                body,
            });
        }

        let challenge_b64 = unwrap_json_string(&body);
        let challenge = BASE64
            .decode(challenge_b64.as_bytes())
            .map_err(|e| AuthError::MalformedChallenge(e.to_string()))?;
        self.state = super::HandshakeState::ChallengeReceived;
        debug!("challenge received, {} bytes", challenge.len());

        let key = KeyMaterial::load(private_key_b64)?;
        Ok(signing::sign_to_base64(key.signing_key(), &challenge))
    }

    /// Run the full handshake and return the session token.
    ///
    /// `private_key_b64` is the username's private key in either the
    /// 32-byte seed or 64-byte seed‖public base64 encoding.
    pub async fn open(mut self, private_key_b64: &str) -> Result<super::SessionToken> {
        let proof = self.prove(private_key_b64).await?;

        let submission = ProofSubmission { response: proof };
        self.state = super::HandshakeState::ResponseSubmitted;
        let (status, body) = self
            .transport
            .post_json(&self.user_path(), &submission)
            .await?;
        if !status.is_success() {
            return Err(AuthError::AuthenticationRejected {
                status: status.as_u16(),
                body,
            });
        }

        let token = unwrap_json_string(&body);
        if token.is_empty() {
            // A success status with no usable credential is still a
            // rejection from the caller's point of view.
            return Err(AuthError::AuthenticationRejected {
                status: status.as_u16(),
                body,
            });
        }

        self.state = super::HandshakeState::Authenticated;
        debug!("session opened for {}", self.username);
        Ok(super::SessionToken(token))
    }
}
