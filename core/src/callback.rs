//! Outbound callbacks to the host resource.
//!
//! The host exposes one endpoint per event name at
//! `https://<resource>/<event>` and expects a JSON body. Both callbacks the
//! overlay makes are deliberately fire-and-forget: the selection response is
//! ignored entirely, and a failed theme-color fetch just leaves the default
//! in place. Ignoring these outcomes is intentional, not an oversight; the
//! overlay has no user-visible failure mode.

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use thiserror::Error;

use ocular_types::Selection;

const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("failed to encode callback body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("callback request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Where accepted selections go.
///
/// The production implementation posts to the host over HTTP; tests capture
/// selections in memory instead.
pub trait SelectionSink {
    fn send_select(&self, selection: Selection);
}

/// HTTP client for the host resource's callback endpoints.
#[derive(Debug, Clone)]
pub struct HostClient {
    http: reqwest::Client,
    resource: String,
}

impl HostClient {
    pub fn new(resource: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), resource: resource.into() }
    }

    fn endpoint(&self, event: &str) -> String {
        format!("https://{}/{}", self.resource, event)
    }

    async fn post_json<T: Serialize>(
        &self,
        event: &str,
        body: &T,
    ) -> Result<serde_json::Value, CallbackError> {
        // Body is serialized by hand so the charset stays on the header,
        // matching what the host resource has always received.
        let payload = serde_json::to_vec(body)?;
        let response = self
            .http
            .post(self.endpoint(event))
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(payload)
            .send()
            .await?;
        Ok(response.json::<serde_json::Value>().await?)
    }

    /// Fetch the host's theme color. Awaited once at startup; any failure or
    /// empty answer means the caller keeps the default color. No retry.
    pub async fn get_server_color(&self) -> Result<Option<String>, CallbackError> {
        let value = self.post_json("getServerColor", &serde_json::json!(null)).await?;
        match value {
            serde_json::Value::String(color) if !color.is_empty() => Ok(Some(color)),
            _ => Ok(None),
        }
    }
}

impl SelectionSink for HostClient {
    /// Spawn the selection post and drop the result. Exactly one request per
    /// accepted activation; nobody waits on it.
    fn send_select(&self, selection: Selection) {
        let client = self.clone();
        tokio::spawn(async move {
            if let Err(err) = client.post_json("select", &selection).await {
                tracing::debug!("select callback dropped: {err}");
            }
        });
    }
}
