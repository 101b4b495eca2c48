//! Public configuration for the mirror pool client.

use std::path::PathBuf;
use std::time::Duration;

/// User-Agent attached to every outbound request. Mirrors answer
/// browser traffic; an SDK-style agent string gets some of them to
/// serve 403s.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Configuration for the mirror pool client.
///
/// Use the builder methods to customize the client.
///
/// # Example
///
/// ```
/// use aria_api::ApiClientConfig;
/// use std::time::Duration;
///
/// let config = ApiClientConfig::new()
///     .with_timeout(Duration::from_secs(5))
///     .with_rate_limit_delay(Duration::from_secs(1));
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// User agent string for HTTP requests.
    pub(crate) user_agent: String,
    /// Per-attempt request timeout.
    pub(crate) timeout: Duration,
    /// Pause after a 429 before moving to the next mirror.
    pub(crate) rate_limit_delay: Duration,
    /// Optional mirror override file.
    pub(crate) endpoints_file: Option<PathBuf>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
            rate_limit_delay: Duration::from_secs(2),
            endpoints_file: None,
        }
    }
}

impl ApiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-attempt request timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the pause taken after a rate-limited response.
    ///
    /// Defaults to 2 seconds.
    #[must_use]
    pub const fn with_rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    /// Set the mirror override file consulted at construction.
    #[must_use]
    pub fn with_endpoints_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.endpoints_file = Some(path.into());
        self
    }
}
