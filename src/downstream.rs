//! Outbound client for the downstream chat service.
//!
//! The relay forwards each user message as-is and expects a
//! `{ "response": string }` body back. Failures are distinguished here for
//! logging only; the relay handler collapses all of them into a single 500.

use serde::{Deserialize, Serialize};

/// Body sent to the downstream chat endpoint.
#[derive(Debug, Serialize)]
struct DownstreamRequest<'a> {
    message: &'a str,
}

/// Body expected from the downstream chat endpoint.
#[derive(Debug, Deserialize)]
struct DownstreamResponse {
    response: String,
}

/// Failure modes of a downstream call.
#[derive(Debug, thiserror::Error)]
pub enum DownstreamError {
    /// Connection, DNS, or other transport-level failure.
    #[error("downstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Downstream answered with a non-success status.
    #[error("downstream returned status {0}")]
    Status(reqwest::StatusCode),
    /// Downstream answered 2xx but the body was not `{ "response": string }`.
    #[error("downstream body was not valid: {0}")]
    MalformedBody(#[source] reqwest::Error),
}

/// Client for the downstream chat service.
///
/// No timeout is configured anywhere in the chain; a hung downstream call
/// hangs the caller until the connection drops.
#[derive(Clone)]
pub struct DownstreamClient {
    http: reqwest::Client,
    chat_url: String,
}

impl std::fmt::Debug for DownstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownstreamClient")
            .field("chat_url", &self.chat_url)
            .finish()
    }
}

impl DownstreamClient {
    /// Create a new client targeting the given chat endpoint URL.
    #[must_use]
    pub fn new(chat_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            chat_url: chat_url.into(),
        }
    }

    /// The configured downstream chat endpoint URL.
    #[must_use]
    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    /// Forward one user message and return the downstream reply text.
    pub async fn send(&self, message: &str) -> Result<String, DownstreamError> {
        let resp = self
            .http
            .post(&self.chat_url)
            .json(&DownstreamRequest { message })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DownstreamError::Status(status));
        }

        let body: DownstreamResponse =
            resp.json().await.map_err(DownstreamError::MalformedBody)?;
        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(DownstreamRequest { message: "hi" }).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "hi" }));
    }

    #[test]
    fn response_body_shape() {
        let body: DownstreamResponse =
            serde_json::from_str(r#"{ "response": "hello" }"#).unwrap();
        assert_eq!(body.response, "hello");
    }

    #[test]
    fn debug_hides_http_client() {
        let client = DownstreamClient::new("http://localhost:5000/api/chat");
        let rendered = format!("{client:?}");
        assert!(rendered.contains("http://localhost:5000/api/chat"));
    }
}
