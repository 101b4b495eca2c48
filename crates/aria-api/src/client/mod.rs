//! Mirror pool client.
//!
//! The client owns the registry, the sticky selector, the status
//! cache, and the HTTP backend; one instance is constructed at
//! process start and shared by reference.

mod catalog;
mod request;

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use aria_core::{Clock, SystemClock};

use crate::config::ApiClientConfig;
use crate::endpoints::EndpointRegistry;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::selector::EndpointSelector;
use crate::status_cache::StatusCache;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest backend and the system clock.
pub type DefaultAriaClient = AriaClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the mirrored music API.
///
/// Generic over an HTTP backend so the failover walk is testable; use
/// [`DefaultAriaClient`] in production. The selector history and the
/// status cache are lock-guarded, so a shared reference supports
/// concurrent callers; each request still walks the mirrors strictly
/// sequentially.
pub struct AriaClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) registry: EndpointRegistry,
    pub(crate) selector: RwLock<EndpointSelector>,
    pub(crate) status_cache: RwLock<StatusCache>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) config: ApiClientConfig,
}

impl DefaultAriaClient {
    /// Create a client: registry from the configured override file
    /// (built-ins otherwise) and a pooled HTTP client.
    #[must_use]
    pub fn new(config: ApiClientConfig) -> Self {
        let backend = ReqwestBackend::new(&config);
        let registry = EndpointRegistry::load(config.endpoints_file.as_deref());
        Self::assemble(config, registry, backend, Arc::new(SystemClock))
    }

    /// Create a client with default configuration.
    #[must_use]
    pub fn default_client() -> Self {
        Self::new(ApiClientConfig::default())
    }
}

impl<B: HttpBackend> AriaClient<B> {
    fn assemble(
        config: ApiClientConfig,
        registry: EndpointRegistry,
        backend: B,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let status_cache = StatusCache::new(Arc::clone(&clock));
        Self {
            backend,
            registry,
            selector: RwLock::new(EndpointSelector::new()),
            status_cache: RwLock::new(status_cache),
            clock,
            config,
        }
    }

    /// The resolved mirror set, for diagnostics.
    #[must_use]
    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    // ------------------------------------------------------------------
    // Status cache pass-throughs
    // ------------------------------------------------------------------

    /// Cached download status for an item, when still fresh.
    #[must_use]
    pub fn cached_status(&self, item_id: u64) -> Option<Value> {
        self.status_cache.read().get(item_id)
    }

    /// Record the latest download status for an item.
    pub fn set_cached_status(&self, item_id: u64, status: Value) {
        self.status_cache.write().put(item_id, status);
    }

    /// Drop the cached status for an item.
    pub fn invalidate_status(&self, item_id: u64) {
        self.status_cache.write().invalidate(item_id);
    }

    /// Remove expired status entries; intended for an external
    /// scheduler.
    pub fn sweep_status_cache(&self) {
        self.status_cache.write().sweep();
    }

    /// Create a client over an explicit registry and backend.
    #[cfg(test)]
    pub(crate) fn with_backend(
        config: ApiClientConfig,
        registry: EndpointRegistry,
        backend: B,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::assemble(config, registry, backend, clock)
    }
}
