use std::sync::Arc;

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Shared read-only state for the HTTP server.
///
/// Holds the credentials read at startup and the anti-forgery state nonce
/// generated once per process. The nonce must be stable across requests so
/// the value embedded in an authorization URL still verifies when the
/// platform redirects the user back; nothing here is mutated after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub state_nonce: String,
}

pub type SharedState = Arc<AppState>;

/// An artwork thumbnail attached to a song or playlist.
///
/// Has no identity beyond its URL; the platform omits dimensions for some
/// image sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// A song inside a playlist. Artist order is preserved as returned by the
/// platform since it is meaningful for featuring credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artists: Vec<String>,
    pub images: Vec<Image>,
}

/// Top-level transfer object for a playlist. Built per API response and
/// discarded with it; there is no persisted identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub title: String,
    pub songs: Vec<Song>,
    pub images: Vec<Image>,
}

/// An authenticated session produced by a successful authorization-code
/// exchange. Exists only after the exchange succeeds, so bearer credentials
/// can never be attached to a request before authentication completes.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
}

impl Session {
    /// Attaches the session's bearer credentials to an outgoing request.
    pub fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.bearer_auth(&self.access_token)
    }
}

// Wire types for the slices of Spotify Web API responses this service
// actually reads. Defaults mirror the platform's optional fields: a missing
// artist name becomes an empty string, missing image lists become empty.

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistPage {
    pub items: Vec<PlaylistSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistDetail {
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackPage {
    // Removed (tombstoned) tracks come back as nulls in the item list.
    #[serde(default)]
    pub items: Vec<Option<TrackEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackEntry {
    #[serde(default)]
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub album: Option<AlbumObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumObject {
    #[serde(default)]
    pub images: Vec<Image>,
}
