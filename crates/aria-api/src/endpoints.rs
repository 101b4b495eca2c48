//! Mirror registry: the ordered set of candidate endpoints.
//!
//! Loaded once at client construction from an optional JSON override
//! file; anything wrong with that file falls back to the built-in
//! list. The set never changes within a process lifetime.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::models::Endpoint;

/// Built-in mirror list, two priority tiers.
const DEFAULT_ENDPOINTS: &[(&str, &str, u32)] = &[
    ("kraken", "https://kraken.squid.wtf", 1),
    ("triton", "https://triton.squid.wtf", 1),
    ("zeus", "https://zeus.squid.wtf", 1),
    ("aether", "https://aether.squid.wtf", 1),
    ("phoenix", "https://phoenix.squid.wtf", 1),
    ("shiva", "https://shiva.squid.wtf", 1),
    ("chaos", "https://chaos.squid.wtf", 1),
    ("hund", "https://hund.qqdl.site", 2),
    ("katze", "https://katze.qqdl.site", 2),
    ("maus", "https://maus.qqdl.site", 2),
    ("vogel", "https://vogel.qqdl.site", 2),
    ("wolf", "https://wolf.qqdl.site", 2),
];

/// Priority assigned to override entries that omit one; sorts last.
const UNRANKED_PRIORITY: u32 = 999;

/// Shape of the override file: `{ "endpoints": [ { name, url, priority } ] }`.
#[derive(Debug, Deserialize)]
struct EndpointsFile {
    endpoints: Vec<EndpointOverride>,
}

#[derive(Debug, Deserialize)]
struct EndpointOverride {
    name: String,
    url: String,
    #[serde(default = "unranked")]
    priority: u32,
}

const fn unranked() -> u32 {
    UNRANKED_PRIORITY
}

/// The immutable set of candidate mirrors.
#[derive(Clone, Debug)]
pub struct EndpointRegistry {
    endpoints: Vec<Endpoint>,
}

impl EndpointRegistry {
    /// Load the registry from a JSON override file.
    ///
    /// A missing, unreadable, malformed, or empty override file is
    /// never fatal: the built-in mirror list is used instead.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        if !path.exists() {
            return Self::builtin();
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable endpoints file, using built-in mirrors");
                return Self::builtin();
            }
        };

        match serde_json::from_str::<EndpointsFile>(&raw) {
            Ok(file) if !file.endpoints.is_empty() => Self {
                endpoints: file
                    .endpoints
                    .into_iter()
                    .map(|entry| Endpoint::new(entry.name, entry.url, entry.priority))
                    .collect(),
            },
            Ok(_) => {
                warn!(path = %path.display(), "endpoints file lists no mirrors, using built-in mirrors");
                Self::builtin()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "malformed endpoints file, using built-in mirrors");
                Self::builtin()
            }
        }
    }

    /// The built-in mirror list.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS
                .iter()
                .map(|&(name, url, priority)| Endpoint::new(name, url, priority))
                .collect(),
        }
    }

    /// Build a registry from an explicit endpoint set.
    #[must_use]
    pub fn from_endpoints(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    /// The candidate mirrors, in load order.
    #[must_use]
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Number of registered mirrors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
