//! Persisted ledger document.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use aria_core::{ActiveEntry, CompletedEntry, FailedEntry};

/// Seconds a completed or failed entry is retained before the
/// open-time sweep removes it.
pub const TERMINAL_RETENTION_SECS: i64 = 3600;

/// The full persisted state: three disjoint maps keyed by stringified
/// item id. `BTreeMap` keeps the serialized document stable across
/// writes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateDocument {
    /// In-flight downloads.
    pub active: BTreeMap<String, ActiveEntry>,
    /// Successfully finished downloads.
    pub completed: BTreeMap<String, CompletedEntry>,
    /// Downloads that gave up.
    pub failed: BTreeMap<String, FailedEntry>,
}

impl StateDocument {
    /// Remove terminal entries older than the retention window.
    ///
    /// Active entries are never swept; an interrupted download should
    /// stay visible until something resolves it. Returns how many
    /// entries were dropped.
    pub fn sweep_terminal(&mut self, now: DateTime<Utc>) -> usize {
        let retention = Duration::seconds(TERMINAL_RETENTION_SECS);
        let before = self.completed.len() + self.failed.len();

        self.completed
            .retain(|_, entry| now - entry.recorded_at <= retention);
        self.failed
            .retain(|_, entry| now - entry.recorded_at <= retention);

        before - (self.completed.len() + self.failed.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    #[test]
    fn test_empty_document_deserializes_from_empty_object() {
        let document: StateDocument = serde_json::from_str("{}").unwrap();
        assert!(document.active.is_empty());
        assert!(document.completed.is_empty());
        assert!(document.failed.is_empty());
    }

    #[test]
    fn test_sweep_drops_only_stale_terminal_entries() {
        let now = at("2026-03-01T12:00:00Z");
        let mut document = StateDocument::default();

        document.active.insert(
            "1".to_string(),
            ActiveEntry {
                progress: 10,
                recorded_at: at("2026-03-01T00:00:00Z"),
                metadata: json!({}),
            },
        );
        document.completed.insert(
            "2".to_string(),
            CompletedEntry {
                filename: "old.flac".to_string(),
                recorded_at: at("2026-03-01T10:00:00Z"),
                metadata: json!({}),
            },
        );
        document.completed.insert(
            "3".to_string(),
            CompletedEntry {
                filename: "new.flac".to_string(),
                recorded_at: at("2026-03-01T11:30:00Z"),
                metadata: json!({}),
            },
        );
        document.failed.insert(
            "4".to_string(),
            FailedEntry {
                error: "timeout".to_string(),
                recorded_at: at("2026-03-01T09:00:00Z"),
                metadata: json!({}),
            },
        );

        let swept = document.sweep_terminal(now);

        assert_eq!(swept, 2);
        // Stale active entries survive a sweep regardless of age
        assert!(document.active.contains_key("1"));
        assert!(!document.completed.contains_key("2"));
        assert!(document.completed.contains_key("3"));
        assert!(document.failed.is_empty());
    }

    #[test]
    fn test_sweep_keeps_entry_exactly_at_retention_boundary() {
        let now = at("2026-03-01T13:00:00Z");
        let mut document = StateDocument::default();
        document.completed.insert(
            "5".to_string(),
            CompletedEntry {
                filename: "edge.flac".to_string(),
                recorded_at: at("2026-03-01T12:00:00Z"),
                metadata: json!({}),
            },
        );

        assert_eq!(document.sweep_terminal(now), 0);
        assert!(document.completed.contains_key("5"));
    }
}
