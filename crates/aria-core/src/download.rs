//! Ledger entry types for tracked downloads.
//!
//! Pure data types with no I/O dependencies. An item lives in at most
//! one of three states; the state tag travels with [`DownloadRecord`]
//! rather than the entries themselves so the persisted maps stay flat.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An in-flight download.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveEntry {
    /// Completion percentage, 0-100.
    pub progress: u8,
    /// When this entry was last written.
    pub recorded_at: DateTime<Utc>,
    /// Opaque caller-supplied metadata.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// A download that finished successfully.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompletedEntry {
    /// Final filename on disk.
    pub filename: String,
    /// When the download completed.
    pub recorded_at: DateTime<Utc>,
    /// Opaque caller-supplied metadata.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// A download that gave up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailedEntry {
    /// Human-readable failure description.
    pub error: String,
    /// When the failure was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Opaque caller-supplied metadata.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// A ledger entry together with its state tag, as returned by lookups.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DownloadRecord {
    /// The item is actively downloading.
    Downloading(ActiveEntry),
    /// The item finished successfully.
    Completed(CompletedEntry),
    /// The item failed.
    Failed(FailedEntry),
}

impl DownloadRecord {
    /// The state tag as it appears on the wire.
    #[must_use]
    pub const fn state(&self) -> &'static str {
        match self {
            Self::Downloading(_) => "downloading",
            Self::Completed(_) => "completed",
            Self::Failed(_) => "failed",
        }
    }
}
