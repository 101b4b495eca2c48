//! Resilient request execution across the mirror pool.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::http::HttpBackend;
use crate::models::Operation;
use crate::url::build_request_url;

use super::AriaClient;

impl<B: HttpBackend> AriaClient<B> {
    /// Walk the mirror pool in priority order until one answers.
    ///
    /// Mirrors are tried strictly sequentially so the sticky ordering
    /// stays meaningful and no mirror sees redundant load. A 429 costs
    /// one rate-limit delay before moving on; any other non-200
    /// response or transport failure moves on immediately. The first
    /// 200 wins and refreshes the success history for `operation`.
    pub(crate) async fn request_json(
        &self,
        path: &str,
        params: &[(&str, String)],
        operation: Operation,
    ) -> ApiResult<Value> {
        let ordered = self
            .selector
            .read()
            .ordered_for(&self.registry, Some(operation));

        for endpoint in &ordered {
            let url = build_request_url(&endpoint.base_url, path, params)?;

            match self.backend.get(&url).await {
                Err(error) => {
                    debug!(endpoint = %endpoint.name, %error, "transport failure, trying next mirror");
                }
                Ok(response) if response.status == 429 => {
                    warn!(endpoint = %endpoint.name, "rate limited, backing off before next mirror");
                    tokio::time::sleep(self.config.rate_limit_delay).await;
                }
                Ok(response) if response.status == 200 => {
                    if let Some(body) = response.body {
                        self.selector
                            .write()
                            .record_success(endpoint, operation, self.clock.now());
                        return Ok(body);
                    }
                    debug!(endpoint = %endpoint.name, "empty 200 body, trying next mirror");
                }
                Ok(response) => {
                    debug!(
                        endpoint = %endpoint.name,
                        status = response.status,
                        "unusable response, trying next mirror"
                    );
                }
            }
        }

        Err(ApiError::NoEndpointAvailable {
            operation: operation.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiClientConfig;
    use crate::endpoints::EndpointRegistry;
    use crate::http::testing::{FakeBackend, Scripted};
    use crate::models::Endpoint;
    use aria_core::test_utils::FixedClock;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_registry() -> EndpointRegistry {
        EndpointRegistry::from_endpoints(vec![
            Endpoint::new("alpha", "https://alpha.test", 1),
            Endpoint::new("bravo", "https://bravo.test", 1),
            Endpoint::new("charlie", "https://charlie.test", 2),
        ])
    }

    fn client_with(backend: FakeBackend) -> AriaClient<FakeBackend> {
        AriaClient::with_backend(
            ApiClientConfig::default(),
            test_registry(),
            backend,
            Arc::new(FixedClock::epoch()),
        )
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let backend = FakeBackend::new()
            .with_response("alpha.test", Scripted::Status(500))
            .with_response("bravo.test", Scripted::Ok(json!({"id": 1})))
            .with_response("charlie.test", Scripted::Ok(json!({"id": 2})));
        let client = client_with(backend);

        let body = client
            .request_json("/album/", &[("id", "1".to_string())], Operation::GetAlbum)
            .await
            .unwrap();

        assert_eq!(body["id"], 1);
        let calls = client.backend.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].contains("alpha.test"));
        assert!(calls[1].contains("bravo.test"));
        assert_eq!(client.backend.calls_matching("charlie.test"), 0);
    }

    #[tokio::test]
    async fn test_exhaustion_visits_every_mirror_once() {
        let backend = FakeBackend::new()
            .with_response("alpha.test", Scripted::Status(500))
            .with_response("bravo.test", Scripted::Transport)
            .with_response("charlie.test", Scripted::Status(404));
        let client = client_with(backend);

        let result = client
            .request_json("/search/", &[("s", "q".to_string())], Operation::SearchTracks)
            .await;

        assert!(matches!(
            result,
            Err(ApiError::NoEndpointAvailable { ref operation }) if operation == "search_tracks"
        ));
        assert_eq!(client.backend.calls().len(), 3);
        for mirror in ["alpha.test", "bravo.test", "charlie.test"] {
            assert_eq!(client.backend.calls_matching(mirror), 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_sleeps_before_next_mirror() {
        let backend = FakeBackend::new()
            .with_response("alpha.test", Scripted::Status(429))
            .with_response("bravo.test", Scripted::Ok(json!({"ok": true})));
        let client = client_with(backend);

        let started = tokio::time::Instant::now();
        let body = client
            .request_json("/track/", &[("id", "9".to_string())], Operation::GetTrack)
            .await
            .unwrap();

        assert_eq!(body["ok"], true);
        assert!(started.elapsed() >= Duration::from_secs(2));
        assert_eq!(client.backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_success_makes_mirror_sticky_for_operation() {
        let backend = FakeBackend::new()
            .with_response("alpha.test", Scripted::Status(500))
            .with_response("bravo.test", Scripted::Status(500))
            .with_response("charlie.test", Scripted::Ok(json!({"ok": true})));
        let client = client_with(backend);

        client
            .request_json("/artist/", &[("f", "3".to_string())], Operation::GetArtist)
            .await
            .unwrap();

        // Second call goes to the known-good mirror first
        client
            .request_json("/artist/", &[("f", "4".to_string())], Operation::GetArtist)
            .await
            .unwrap();

        let calls = client.backend.calls();
        assert_eq!(calls.len(), 4);
        assert!(calls[3].contains("charlie.test"));
        assert_eq!(client.backend.calls_matching("charlie.test"), 2);
    }

    #[tokio::test]
    async fn test_other_status_codes_skip_without_sleeping() {
        let backend = FakeBackend::new()
            .with_response("alpha.test", Scripted::Status(503))
            .with_response("bravo.test", Scripted::Ok(json!({"ok": true})));
        let client = client_with(backend);

        let body = client
            .request_json("/album/tracks", &[("id", "5".to_string())], Operation::GetAlbumTracks)
            .await
            .unwrap();

        assert_eq!(body["ok"], true);
    }
}
