//! Validation and revocation of existing session tokens.

use log::debug;

use crate::error::{AuthError, Result};
use crate::transport::{unwrap_json_string, TransportClient};

use super::SessionToken;

/// Outcome of a token validation query.
///
/// `Invalid` is a value, not an error: a rejected or expired token is an
/// ordinary answer to the question being asked. Only transport failures
/// surface as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The token is live; the service reports the username it is bound to.
    Valid { username: String },
    /// The service rejected the token or returned no usable username.
    Invalid,
}

/// Ask the service whether `token` is live, returning the bound username.
pub async fn validate(transport: &TransportClient, token: &SessionToken) -> Result<Validation> {
    let path = format!(
        "api/user/validate?token={}",
        urlencoding::encode(token.as_str())
    );
    let (status, body) = transport.post_empty(&path).await?;
    if !status.is_success() {
        debug!("validate rejected with HTTP {}", status.as_u16());
        return Ok(Validation::Invalid);
    }

    let username = unwrap_json_string(&body);
    if username.is_empty() {
        return Ok(Validation::Invalid);
    }
    Ok(Validation::Valid { username })
}

/// Revoke `token`.
///
/// Only the response status is interpreted; revocation is idempotent from
/// the caller's point of view when the service reports success.
pub async fn destroy(transport: &TransportClient, token: &SessionToken) -> Result<()> {
    let path = format!(
        "api/user/destroy?token={}",
        urlencoding::encode(token.as_str())
    );
    let (status, body) = transport.post_empty(&path).await?;
    if !status.is_success() {
        return Err(AuthError::DestroyFailed {
            status: status.as_u16(),
            body,
        });
    }
    debug!("session destroyed");
    Ok(())
}
