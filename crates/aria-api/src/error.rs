//! Error types for mirror pool operations.

use thiserror::Error;

/// Result type alias for mirror pool operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to callers of the API client.
///
/// Per-mirror failures (timeouts, 5xx, rate limits) are handled inside
/// the failover walk and never reach the caller individually; only
/// total exhaustion and malformed inputs do.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Every candidate mirror was tried and none returned a usable
    /// response. A soft failure: callers retry on their own schedule.
    #[error("no endpoint available for {operation}")]
    NoEndpointAvailable {
        /// The operation that exhausted the pool.
        operation: String,
    },

    /// A request URL could not be built from the mirror base.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
