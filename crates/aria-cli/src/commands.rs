//! Subcommand definitions.

use clap::{Subcommand, ValueEnum};

use aria_api::Quality;

/// All aria subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalogue
    Search {
        /// Free-text query
        query: String,

        /// What to search for
        #[arg(long, value_enum, default_value_t = SearchKind::Tracks)]
        kind: SearchKind,
    },

    /// Fetch track metadata and stream info
    Track {
        /// Track id
        id: u64,

        /// Audio quality to request
        #[arg(long, value_enum, default_value_t = QualityArg::Lossless)]
        quality: QualityArg,
    },

    /// Fetch album metadata
    Album {
        /// Album id
        id: u64,
    },

    /// List the tracks of an album
    AlbumTracks {
        /// Album id
        id: u64,
    },

    /// Fetch artist metadata
    Artist {
        /// Artist id
        id: u64,
    },

    /// Show the tracked state of one download
    Status {
        /// Item id
        id: u64,
    },

    /// Show the full download ledger
    Downloads,

    /// Forget the tracked state of one download
    Clear {
        /// Item id
        id: u64,
    },

    /// Print the resolved mirror list
    Endpoints,

    /// Print the data locations aria uses
    Paths,
}

/// Search target selector.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SearchKind {
    Tracks,
    Albums,
    Artists,
}

/// CLI-facing quality names; mapped onto the client's enum.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum QualityArg {
    Low,
    High,
    Lossless,
    HiRes,
}

impl From<QualityArg> for Quality {
    fn from(arg: QualityArg) -> Self {
        match arg {
            QualityArg::Low => Self::Low,
            QualityArg::High => Self::High,
            QualityArg::Lossless => Self::Lossless,
            QualityArg::HiRes => Self::HiRes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_arg_maps_to_client_quality() {
        assert_eq!(Quality::from(QualityArg::Lossless), Quality::Lossless);
        assert_eq!(Quality::from(QualityArg::HiRes), Quality::HiRes);
        assert_eq!(Quality::from(QualityArg::Low).as_str(), "LOW");
    }
}
