//! Core domain types for aria.
//!
//! This crate holds the pure building blocks shared by the API client
//! and the download state store: ledger entry types, the [`Clock`]
//! port, and filesystem path resolution. No network or storage I/O
//! lives here.

#![deny(unused_crate_dependencies)]

pub mod clock;
pub mod download;
pub mod paths;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use clock::{Clock, SystemClock};
pub use download::{ActiveEntry, CompletedEntry, DownloadRecord, FailedEntry};
pub use paths::{PathError, data_root, endpoints_file_path, music_dir, state_file_path};
