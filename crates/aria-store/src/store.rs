//! Durable download state store.
//!
//! Every mutation rewrites the full document synchronously;
//! persistence failures degrade durability, never correctness, so
//! they are logged and swallowed. The document sits behind a mutex so
//! the read-modify-write-persist cycle is exclusive even with
//! concurrent callers.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::warn;

use aria_core::{ActiveEntry, Clock, CompletedEntry, DownloadRecord, FailedEntry};

use crate::document::StateDocument;

/// File-backed ledger of download state, one live entry per item.
pub struct DownloadStateStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
    state: Mutex<StateDocument>,
}

impl DownloadStateStore {
    /// Open the ledger at `path`.
    ///
    /// Loads whatever is there (a missing, unreadable, or corrupt file
    /// starts an empty ledger), then sweeps terminal entries older
    /// than the retention window, persisting if any were removed.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        let path = path.into();
        let mut document = Self::load_document(&path);
        let swept = document.sweep_terminal(clock.now());

        let store = Self {
            path,
            clock,
            state: Mutex::new(document),
        };
        if swept > 0 {
            store.persist(&store.state.lock());
        }
        store
    }

    /// Where the ledger lives on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_document(path: &Path) -> StateDocument {
        if !path.exists() {
            return StateDocument::default();
        }

        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(document) => document,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt state file, starting with an empty ledger");
                    StateDocument::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable state file, starting with an empty ledger");
                StateDocument::default()
            }
        }
    }

    /// Write the full document back, best effort.
    fn persist(&self, state: &StateDocument) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), error = %e, "could not create state directory");
                return;
            }
        }

        match serde_json::to_string_pretty(state) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    warn!(path = %self.path.display(), error = %e, "failed to persist download state");
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to serialize download state");
            }
        }
    }

    /// Create or overwrite the Active entry for an item.
    pub fn set_active(&self, item_id: u64, progress: u8, metadata: Value) {
        let mut state = self.state.lock();
        state.active.insert(
            item_id.to_string(),
            ActiveEntry {
                progress,
                recorded_at: self.clock.now(),
                metadata,
            },
        );
        self.persist(&state);
    }

    /// Update progress for an Active item.
    ///
    /// Items not currently Active are silently ignored; progress
    /// updates race with completion and losing that race is harmless.
    pub fn update_progress(&self, item_id: u64, progress: u8) {
        let mut state = self.state.lock();
        let Some(entry) = state.active.get_mut(&item_id.to_string()) else {
            return;
        };
        entry.progress = progress;
        entry.recorded_at = self.clock.now();
        self.persist(&state);
    }

    /// Mark an item completed, removing any Active entry in the same
    /// mutation.
    pub fn set_completed(&self, item_id: u64, filename: impl Into<String>, metadata: Value) {
        let key = item_id.to_string();
        let mut state = self.state.lock();
        state.active.remove(&key);
        state.completed.insert(
            key,
            CompletedEntry {
                filename: filename.into(),
                recorded_at: self.clock.now(),
                metadata,
            },
        );
        self.persist(&state);
    }

    /// Mark an item failed, removing any Active entry in the same
    /// mutation.
    pub fn set_failed(&self, item_id: u64, error: impl Into<String>, metadata: Value) {
        let key = item_id.to_string();
        let mut state = self.state.lock();
        state.active.remove(&key);
        state.failed.insert(
            key,
            FailedEntry {
                error: error.into(),
                recorded_at: self.clock.now(),
                metadata,
            },
        );
        self.persist(&state);
    }

    /// Forget an item in whichever state it is in.
    pub fn clear(&self, item_id: u64) {
        let key = item_id.to_string();
        let mut state = self.state.lock();
        state.active.remove(&key);
        state.completed.remove(&key);
        state.failed.remove(&key);
        self.persist(&state);
    }

    /// The tracked state of an item: Active wins over Completed wins
    /// over Failed.
    #[must_use]
    pub fn get(&self, item_id: u64) -> Option<DownloadRecord> {
        let key = item_id.to_string();
        let state = self.state.lock();

        if let Some(entry) = state.active.get(&key) {
            return Some(DownloadRecord::Downloading(entry.clone()));
        }
        if let Some(entry) = state.completed.get(&key) {
            return Some(DownloadRecord::Completed(entry.clone()));
        }
        state
            .failed
            .get(&key)
            .map(|entry| DownloadRecord::Failed(entry.clone()))
    }

    /// Snapshot of the in-flight downloads.
    #[must_use]
    pub fn list_active(&self) -> BTreeMap<String, ActiveEntry> {
        self.state.lock().active.clone()
    }

    /// Snapshot of the completed downloads.
    #[must_use]
    pub fn list_completed(&self) -> BTreeMap<String, CompletedEntry> {
        self.state.lock().completed.clone()
    }

    /// Snapshot of the failed downloads.
    #[must_use]
    pub fn list_failed(&self) -> BTreeMap<String, FailedEntry> {
        self.state.lock().failed.clone()
    }
}
