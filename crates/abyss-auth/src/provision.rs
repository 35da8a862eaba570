//! Delegated identity provisioning.
//!
//! An existing ("authority") identity proves ownership of its key via the
//! handshake's challenge-proof step, then asks the service to bind a
//! freshly generated keypair to a new subordinate identity. The new key is
//! never derived from or related to the authority's key.

use log::debug;
use serde::Serialize;

use crate::crypto::KeyMaterial;
use crate::error::{AuthError, Result};
use crate::session::AuthSession;
use crate::transport::TransportClient;

/// Provisioning request body. Field names are fixed by the remote service.
#[derive(Serialize)]
struct ProvisionRequest {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Parent")]
    parent: String,
    #[serde(rename = "Privilege")]
    privilege: i64,
    #[serde(rename = "PublicKey")]
    public_key: String,
}

/// Key material for a freshly provisioned identity.
///
/// Returned only when the service has bound the public key to the new
/// account. This is the caller's only opportunity to capture the private
/// key; it is never recoverable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdentity {
    /// Base64 of the 64-byte seed‖public private encoding.
    pub private_key_base64: String,
    /// Base64 of the raw 32-byte public key.
    pub public_key_base64: String,
}

/// Create a new identity under `authority`'s delegation.
///
/// `privilege` is a caller-supplied integer whose meaning is defined
/// entirely by the remote service. On any failure no keys are returned,
/// since the service never bound the public key to an account.
pub async fn create(
    transport: &TransportClient,
    authority: &str,
    authority_private_b64: &str,
    new_username: &str,
    privilege: i64,
) -> Result<NewIdentity> {
    // 1. Prove control of the authority's key over a fresh challenge
    let proof = AuthSession::new(transport, authority)
        .prove(authority_private_b64)
        .await?;

    // 2. Independent keypair for the new identity
    let new_key = KeyMaterial::generate();

    // 3. Submit the provisioning request
    let request = ProvisionRequest {
        response: proof,
        name: new_username.to_string(),
        parent: authority.to_string(),
        privilege,
        public_key: new_key.public_key_base64(),
    };
    let path = format!("api/user/{}", urlencoding::encode(authority));
    let (status, body) = transport.patch_json(&path, &request).await?;
    if !status.is_success() {
        return Err(AuthError::ProvisioningFailed {
            status: status.as_u16(),
            body,
        });
    }

    debug!("provisioned {} under {}", new_username, authority);
    Ok(NewIdentity {
        private_key_base64: new_key.private_key_base64(),
        public_key_base64: new_key.public_key_base64(),
    })
}
