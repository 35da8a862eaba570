//! HTTP transport against a configured service base address.
//!
//! A thin wrapper over `reqwest::Client` that joins paths onto a
//! trailing-slash-normalized base URL and hands back raw status plus body
//! text. Protocol interpretation of either is left to the callers.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::error::Result;

/// Fixed per-request timeout. A timeout surfaces to the caller the same
/// way as any other transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client bound to one service base address.
///
/// The underlying `reqwest::Client` holds a connection pool and may be
/// shared across concurrent protocol flows.
pub struct TransportClient {
    base_url: String,
    client: Client,
}

impl TransportClient {
    /// Create a transport bound to `base_url`.
    ///
    /// Trailing slashes are stripped so joined paths never double up.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path`, returning the response status and body text.
    pub async fn get(&self, path: &str) -> Result<(StatusCode, String)> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok((status, body))
    }

    /// POST `path` with no body.
    pub async fn post_empty(&self, path: &str) -> Result<(StatusCode, String)> {
        let response = self.client.post(self.url(path)).send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok((status, body))
    }

    /// POST `path` with a JSON body.
    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<(StatusCode, String)> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Ok((status, text))
    }

    /// PATCH `path` with a JSON body.
    pub async fn patch_json<T: Serialize>(&self, path: &str, body: &T) -> Result<(StatusCode, String)> {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Ok((status, text))
    }
}

/// Unwrap a response body that may be a JSON string literal.
///
/// The service sometimes returns `"alice"` instead of `alice`. Try a
/// structured JSON-string decode first, then fall back to stripping one
/// layer of surrounding quotes. Idempotent on already-plain input. This is
/// a compatibility shim for an inconsistent service and is preserved as-is.
pub fn unwrap_json_string(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(serde_json::Value::String(s)) => s,
        _ => {
            if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
                text[1..text.len() - 1].to_string()
            } else {
                text.to_string()
            }
        }
    }
}
