//! HTTP backend abstraction for the mirror pool.
//!
//! Production uses a pooled reqwest client; tests inject a scripted
//! fake so the failover walk is observable without a network.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::ApiClientConfig;

/// Transport-level failure: connect error, timeout, or an unreadable
/// body. Always consumed inside the failover walk.
#[derive(Debug, Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Status and, for 200s, decoded body of one upstream response.
#[derive(Debug)]
pub struct JsonResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body; only present on 200.
    pub body: Option<Value>,
}

/// Trait for HTTP backends that issue a single GET.
///
/// The failover executor is generic over this so tests can script
/// per-mirror outcomes and count calls.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Issue a GET and decode the body when the status is 200.
    async fn get(&self, url: &Url) -> Result<JsonResponse, TransportError>;
}

/// Production backend using a pooled reqwest client.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Build the pooled client with the configured timeout and
    /// User-Agent.
    pub fn new(config: &ApiClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");
        Self { client }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get(&self, url: &Url) -> Result<JsonResponse, TransportError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        if status == 200 {
            // A 200 with an undecodable body is as useless as a dead
            // mirror; surface it as a transport failure.
            let body = response
                .json()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;
            Ok(JsonResponse {
                status,
                body: Some(body),
            })
        } else {
            Ok(JsonResponse { status, body: None })
        }
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::testing::{FakeBackend, Scripted};
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reqwest_backend_creation() {
        let config = ApiClientConfig::default();
        let _backend = ReqwestBackend::new(&config);
    }

    #[tokio::test]
    async fn test_fake_backend_returns_scripted_body() {
        let backend =
            FakeBackend::new().with_response("alpha.test", Scripted::Ok(json!({"items": []})));

        let url = Url::parse("https://alpha.test/search/?s=query").unwrap();
        let response = backend.get(&url).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body.unwrap()["items"], json!([]));
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_fake_backend_unscripted_is_404() {
        let backend = FakeBackend::new();
        let url = Url::parse("https://unknown.test/track/").unwrap();

        let response = backend.get(&url).await.unwrap();
        assert_eq!(response.status, 404);
        assert!(response.body.is_none());
    }

    #[tokio::test]
    async fn test_fake_backend_transport_failure() {
        let backend = FakeBackend::new().with_response("alpha.test", Scripted::Transport);
        let url = Url::parse("https://alpha.test/album/").unwrap();

        let result = backend.get(&url).await;
        assert!(result.is_err());
        assert_eq!(backend.calls_matching("alpha.test"), 1);
    }
}
