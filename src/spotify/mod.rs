//! # Spotify Integration Module
//!
//! Client implementation for the slice of the Spotify Web API this service
//! uses: OAuth 2.0 authorization-code exchange, profile lookup, and playlist
//! retrieval. The client is constructed per request from the shared app
//! state and never outlives the operation it serves.
//!
//! ## Submodules
//!
//! - [`auth`] - Consent-screen URL construction and the authorization-code
//!   token exchange (Basic client authentication, state-nonce verification)
//! - [`playlists`] - The playlist read path (profile, playlist page,
//!   per-playlist detail) and the mapping into domain [`Playlist`] values
//!
//! ## Endpoints used
//!
//! - `GET {accounts}/authorize` - consent screen (URL only, never fetched)
//! - `POST {accounts}/api/token` - code-for-token exchange
//! - `GET {api}/me` - current user's profile
//! - `GET {api}/users/{id}/playlists` - playlist summaries, first page only
//! - `GET {api}/playlists/{id}` - playlist detail with a fields selector
//!
//! Other recognized platforms (Apple Music, YouTube Music) have no client
//! implementation and fail resolution in [`MusicClient::for_platform`].

pub mod auth;
pub mod playlists;

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;

use crate::error::ApiError;
use crate::platform::Platform;
use crate::types::{AppState, Playlist};

/// Fixed permission scope requested on the consent screen.
pub const AUTHORIZATION_SCOPE: &str = "playlist-modify-private playlist-read-private";

/// Upstream calls that exceed this are treated as transport failures.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Spotify Web API, holding the application credentials and
/// the process-wide state nonce. Authentication state lives in the
/// [`crate::types::Session`] value returned by the token exchange, not in
/// the client itself.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    client_id: String,
    client_secret: String,
    state_nonce: String,
}

impl SpotifyClient {
    pub fn new(state: &AppState) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(SpotifyClient {
            http,
            client_id: state.config.client_id.clone(),
            client_secret: state.config.client_secret.clone(),
            state_nonce: state.state_nonce.clone(),
        })
    }
}

/// A resolved platform client. One variant per implemented platform; the
/// factory fails closed for identifiers without an implementation.
#[derive(Debug, Clone)]
pub enum MusicClient {
    Spotify(SpotifyClient),
}

impl MusicClient {
    /// Resolves a platform identifier to a concrete client instance.
    ///
    /// Fails with a bad-request error naming the canonical identifier when
    /// no implementation exists for the platform.
    pub fn for_platform(platform: Platform, state: &AppState) -> Result<Self, ApiError> {
        match platform {
            Platform::Spotify => Ok(MusicClient::Spotify(SpotifyClient::new(state)?)),
            unsupported => Err(ApiError::UnsupportedPlatform(unsupported.to_string())),
        }
    }

    /// Builds the platform's consent-screen URL. Pure construction, no
    /// network call.
    pub fn authorization_url(&self, redirect_uri: &str) -> Result<String, ApiError> {
        match self {
            MusicClient::Spotify(client) => client.authorization_url(redirect_uri),
        }
    }

    /// Runs the full read path: authorization-code exchange followed by
    /// profile and playlist retrieval.
    pub async fn get_playlists(
        &self,
        query: &HashMap<String, String>,
        redirect_uri: &str,
    ) -> Result<Vec<Playlist>, ApiError> {
        match self {
            MusicClient::Spotify(client) => client.get_playlists(query, redirect_uri).await,
        }
    }

    /// Creates playlists on the platform from already-validated data.
    pub async fn create_playlists(
        &self,
        playlists: Vec<Playlist>,
    ) -> Result<Vec<Playlist>, ApiError> {
        match self {
            MusicClient::Spotify(client) => client.create_playlists(playlists).await,
        }
    }
}
