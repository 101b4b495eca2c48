//! Typed operations over the upstream music API.
//!
//! The response shape is upstream-defined and passed through opaquely.

use serde_json::Value;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{Operation, Quality};

use super::AriaClient;

impl<B: HttpBackend> AriaClient<B> {
    /// Search tracks by free-text query.
    pub async fn search_tracks(&self, query: &str) -> ApiResult<Value> {
        self.request_json(
            "/search/",
            &[("s", query.to_string())],
            Operation::SearchTracks,
        )
        .await
    }

    /// Search albums by free-text query.
    pub async fn search_albums(&self, query: &str) -> ApiResult<Value> {
        self.request_json(
            "/search/",
            &[("al", query.to_string())],
            Operation::SearchAlbums,
        )
        .await
    }

    /// Search artists by free-text query.
    pub async fn search_artists(&self, query: &str) -> ApiResult<Value> {
        self.request_json(
            "/search/",
            &[("a", query.to_string())],
            Operation::SearchArtists,
        )
        .await
    }

    /// Track metadata and stream info at the requested quality.
    pub async fn get_track(&self, track_id: u64, quality: Quality) -> ApiResult<Value> {
        self.request_json(
            "/track/",
            &[
                ("id", track_id.to_string()),
                ("quality", quality.as_str().to_string()),
            ],
            Operation::GetTrack,
        )
        .await
    }

    /// Album metadata.
    pub async fn get_album(&self, album_id: u64) -> ApiResult<Value> {
        self.request_json(
            "/album/",
            &[("id", album_id.to_string())],
            Operation::GetAlbum,
        )
        .await
    }

    /// The track list of an album.
    pub async fn get_album_tracks(&self, album_id: u64) -> ApiResult<Value> {
        self.request_json(
            "/album/tracks",
            &[("id", album_id.to_string())],
            Operation::GetAlbumTracks,
        )
        .await
    }

    /// Artist metadata.
    pub async fn get_artist(&self, artist_id: u64) -> ApiResult<Value> {
        self.request_json(
            "/artist/",
            &[("f", artist_id.to_string())],
            Operation::GetArtist,
        )
        .await
    }
}
