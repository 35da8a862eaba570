//! Error types for the Abyss authentication client.
//!
//! All errors are strongly typed and propagated without panicking.
//! Private key material and raw signatures are never included in
//! error messages.

/// Authentication client error types covering all protocol flows.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid key encoding: {0}")]
    InvalidEncoding(String),

    #[error("Invalid key length: {0} bytes (expected 32 or 64)")]
    InvalidKeyLength(usize),

    #[error("Challenge is not valid base64: {0}")]
    MalformedChallenge(String),

    #[error("Signature verification failed")]
    SignatureInvalid,

    #[error("Challenge unavailable: HTTP {status}: {body}")]
    ChallengeUnavailable { status: u16, body: String },

    #[error("Authentication rejected: HTTP {status}: {body}")]
    AuthenticationRejected { status: u16, body: String },

    #[error("Session destroy failed: HTTP {status}: {body}")]
    DestroyFailed { status: u16, body: String },

    #[error("Identity provisioning failed: HTTP {status}: {body}")]
    ProvisioningFailed { status: u16, body: String },
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, AuthError>;
