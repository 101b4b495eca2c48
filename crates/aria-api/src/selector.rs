//! Sticky endpoint selection based on recent success.
//!
//! The selector remembers, per operation, the mirror that last
//! answered with a 200 and promotes it to the front of the walk.
//! Sticky routing toward a known-good mirror avoids probing dead ones
//! on every call without requiring real health checks.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::endpoints::EndpointRegistry;
use crate::models::{Endpoint, Operation, SuccessRecord};

/// Effective priority assigned to the most recently successful mirror.
const STICKY_PRIORITY: u32 = 0;

/// Per-operation success history and the ordering derived from it.
#[derive(Debug, Default)]
pub struct EndpointSelector {
    history: HashMap<Operation, SuccessRecord>,
}

impl EndpointSelector {
    /// Create a selector with empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Priority-ordered view of the registry for one operation.
    ///
    /// Ordering is ascending by `(effective_priority, name)`; the
    /// effective priority is the static one, except the mirror named
    /// by the operation's success record (when still registered) is
    /// forced to the front. The name tie-break keeps the ordering
    /// deterministic. The registry's canonical data is never mutated.
    #[must_use]
    pub fn ordered_for(
        &self,
        registry: &EndpointRegistry,
        operation: Option<Operation>,
    ) -> Vec<Endpoint> {
        let sticky = operation
            .and_then(|op| self.history.get(&op))
            .map(|record| record.endpoint_name.as_str());

        let effective = |endpoint: &Endpoint| {
            if sticky == Some(endpoint.name.as_str()) {
                STICKY_PRIORITY
            } else {
                endpoint.priority
            }
        };

        let mut ordered: Vec<Endpoint> = registry.endpoints().to_vec();
        ordered.sort_by(|a, b| {
            effective(a)
                .cmp(&effective(b))
                .then_with(|| a.name.cmp(&b.name))
        });
        ordered
    }

    /// Record a successful response, overwriting any previous record
    /// for the operation.
    pub fn record_success(
        &mut self,
        endpoint: &Endpoint,
        operation: Operation,
        now: DateTime<Utc>,
    ) {
        self.history.insert(
            operation,
            SuccessRecord {
                endpoint_name: endpoint.name.clone(),
                base_url: endpoint.base_url.clone(),
                recorded_at: now,
            },
        );
    }

    /// The current success record for an operation, if any.
    #[must_use]
    pub fn last_success(&self, operation: Operation) -> Option<&SuccessRecord> {
        self.history.get(&operation)
    }
}
