//! Durable download state ledger.
//!
//! Tracks in-flight, completed, and failed downloads in a single JSON
//! document persisted on every mutation. Terminal entries age out
//! after an hour; the sweep runs when the store opens.

#![deny(unused_crate_dependencies)]

mod document;
mod store;

pub use document::{StateDocument, TERMINAL_RETENTION_SECS};
pub use store::DownloadStateStore;
