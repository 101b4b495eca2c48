//! Failover client for a mirrored music metadata/streaming API.
//!
//! The upstream API is served by a pool of interchangeable mirrors.
//! This crate selects among them with sticky success-based ordering,
//! walks the pool sequentially until one answers, and caches recent
//! per-item download status.

#![deny(unused_crate_dependencies)]
// DefaultAriaClient is meant to be used through its typed methods, not
// its internal generic structure
#![allow(private_interfaces)]
#![allow(private_bounds)]

mod client;
mod config;
mod endpoints;
mod error;
mod http;
mod models;
mod selector;
mod status_cache;
mod url;

// ============================================================================
// Public API
// ============================================================================

pub use client::{AriaClient, DefaultAriaClient};
pub use config::ApiClientConfig;
pub use endpoints::EndpointRegistry;
pub use error::{ApiError, ApiResult};
pub use models::{Endpoint, Operation, Quality, SuccessRecord};
pub use selector::EndpointSelector;
pub use status_cache::StatusCache;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
