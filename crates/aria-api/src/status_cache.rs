//! Short-TTL cache of last-known download status per item.
//!
//! Avoids redundant upstream polling while a download is in flight.
//! Entries expire lazily on read; `sweep` exists for an external
//! scheduler to reclaim memory eagerly.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use aria_core::Clock;

/// Default entry lifetime in seconds.
const DEFAULT_TTL_SECS: i64 = 300;

/// One cached status document.
#[derive(Clone, Debug)]
struct CachedStatus {
    status: Value,
    recorded_at: DateTime<Utc>,
}

/// In-memory cache of per-item download status.
pub struct StatusCache {
    entries: HashMap<u64, CachedStatus>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl StatusCache {
    /// Create a cache with the default 300s TTL.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_ttl(clock, Duration::seconds(DEFAULT_TTL_SECS))
    }

    /// Create a cache with an explicit TTL.
    #[must_use]
    pub fn with_ttl(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
        }
    }

    /// Last-known status for an item, when still fresh.
    ///
    /// Expired entries stop being returned immediately but are only
    /// removed by [`StatusCache::sweep`].
    #[must_use]
    pub fn get(&self, item_id: u64) -> Option<Value> {
        let entry = self.entries.get(&item_id)?;
        if self.clock.now() - entry.recorded_at < self.ttl {
            Some(entry.status.clone())
        } else {
            None
        }
    }

    /// Record the latest status for an item, stamped now.
    pub fn put(&mut self, item_id: u64, status: Value) {
        self.entries.insert(
            item_id,
            CachedStatus {
                status,
                recorded_at: self.clock.now(),
            },
        );
    }

    /// Drop the entry for an item, if present.
    pub fn invalidate(&mut self, item_id: u64) {
        self.entries.remove(&item_id);
    }

    /// Remove every entry older than the TTL.
    pub fn sweep(&mut self) {
        let now = self.clock.now();
        self.entries
            .retain(|_, entry| now - entry.recorded_at <= self.ttl);
    }

    /// Number of entries, fresh or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
