//! Domain types for the mirror pool client.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// One mirror of the upstream API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Unique mirror name (e.g. "kraken").
    pub name: String,
    /// Base URL the request path is appended to.
    pub base_url: String,
    /// Static priority tier; lower is preferred.
    pub priority: u32,
}

impl Endpoint {
    /// Create an endpoint.
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, priority: u32) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            priority,
        }
    }
}

/// Logical request kinds, used as the sticky-routing key.
///
/// The most recently successful mirror is remembered per operation,
/// not globally, since mirrors degrade per-route in practice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    SearchTracks,
    SearchAlbums,
    SearchArtists,
    GetTrack,
    GetAlbum,
    GetAlbumTracks,
    GetArtist,
}

impl Operation {
    /// The canonical snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchTracks => "search_tracks",
            Self::SearchAlbums => "search_albums",
            Self::SearchArtists => "search_artists",
            Self::GetTrack => "get_track",
            Self::GetAlbum => "get_album",
            Self::GetAlbumTracks => "get_album_tracks",
            Self::GetArtist => "get_artist",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audio quality tiers accepted by the track endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Quality {
    Low,
    High,
    #[default]
    Lossless,
    HiRes,
}

impl Quality {
    /// The upstream parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::High => "HIGH",
            Self::Lossless => "LOSSLESS",
            Self::HiRes => "HI_RES",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Quality {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "HIGH" => Ok(Self::High),
            "LOSSLESS" => Ok(Self::Lossless),
            "HI_RES" | "HIRES" => Ok(Self::HiRes),
            _ => Err(()),
        }
    }
}

/// Last successful mirror for one operation.
///
/// Overwritten on each new success; never persisted.
#[derive(Clone, Debug)]
pub struct SuccessRecord {
    /// Name of the mirror that answered.
    pub endpoint_name: String,
    /// Its base URL at the time of the success.
    pub base_url: String,
    /// When the success happened.
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_are_snake_case() {
        assert_eq!(Operation::SearchTracks.as_str(), "search_tracks");
        assert_eq!(Operation::GetAlbumTracks.as_str(), "get_album_tracks");
        assert_eq!(Operation::GetArtist.to_string(), "get_artist");
    }

    #[test]
    fn test_quality_default_is_lossless() {
        assert_eq!(Quality::default(), Quality::Lossless);
        assert_eq!(Quality::default().as_str(), "LOSSLESS");
    }

    #[test]
    fn test_quality_parses_upstream_values() {
        assert_eq!("LOSSLESS".parse::<Quality>().unwrap(), Quality::Lossless);
        assert_eq!("hi_res".parse::<Quality>().unwrap(), Quality::HiRes);
        assert!("MP3".parse::<Quality>().is_err());
    }

    #[test]
    fn test_endpoint_construction() {
        let endpoint = Endpoint::new("kraken", "https://kraken.squid.wtf", 1);
        assert_eq!(endpoint.name, "kraken");
        assert_eq!(endpoint.priority, 1);
    }
}
