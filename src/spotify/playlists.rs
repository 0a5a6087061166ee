use std::collections::HashMap;

use crate::config;
use crate::error::ApiError;
use crate::spotify::SpotifyClient;
use crate::types::{Playlist, PlaylistDetail, PlaylistPage, PlaylistSummary, Session, Song, UserProfile};
use crate::utils;

/// Fields selector for the playlist detail request: only the images and the
/// track name/artist/album-artwork slices this service maps.
const PLAYLIST_DETAIL_FIELDS: &str =
    "images,tracks.items(track(name,artists(name),album(images)))";

/// Page size for the playlist summary request. Only the first page is
/// fetched; accounts with more than 50 playlists are truncated. Known
/// limitation, not paginated further.
const PLAYLIST_PAGE_LIMIT: &str = "50";

impl SpotifyClient {
    /// Retrieves the caller's playlists from their Spotify account.
    ///
    /// Runs the full read path: exchanges the authorization code carried in
    /// the request for a session, resolves the user id from the profile,
    /// fetches the first page of playlist summaries, then each playlist's
    /// detail in summary order. Fails unauthorized when the exchange is
    /// refused; transport and decoding failures propagate as unhandled.
    pub async fn get_playlists(
        &self,
        query: &HashMap<String, String>,
        redirect_uri: &str,
    ) -> Result<Vec<Playlist>, ApiError> {
        let code = query.get("code").map(String::as_str).unwrap_or_default();
        let state = query.get("state").map(String::as_str).unwrap_or_default();

        let session = self.exchange_code(code, state, redirect_uri).await?;
        let user_id = self.current_user_id(&session).await?;
        let summaries = self.user_playlists(&session, &user_id).await?;

        let mut playlists = Vec::with_capacity(summaries.len());
        for summary in summaries {
            playlists.push(self.playlist_detail(&session, summary).await?);
        }
        Ok(playlists)
    }

    /// Creates playlists on the caller's Spotify account.
    ///
    /// The platform write call is an intentionally incomplete stub: the
    /// validated input is echoed back unchanged, so the API contract is
    /// exercised end to end without inventing upstream write semantics.
    pub async fn create_playlists(
        &self,
        playlists: Vec<Playlist>,
    ) -> Result<Vec<Playlist>, ApiError> {
        Ok(playlists)
    }

    /// Resolves the current user's id from their profile uri, which has the
    /// form `spotify:user:<id>`.
    async fn current_user_id(&self, session: &Session) -> Result<String, ApiError> {
        let endpoint = format!("{}/me", config::spotify_apiurl());
        let profile: UserProfile = session
            .authorize(self.http.get(&endpoint))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(utils::id_from_uri(&profile.uri).to_string())
    }

    /// Fetches the first page of the user's playlist summaries.
    async fn user_playlists(
        &self,
        session: &Session,
        user_id: &str,
    ) -> Result<Vec<PlaylistSummary>, ApiError> {
        let endpoint = format!("{}/users/{}/playlists", config::spotify_apiurl(), user_id);
        let page: PlaylistPage = session
            .authorize(self.http.get(&endpoint))
            .query(&[("limit", PLAYLIST_PAGE_LIMIT)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page.items)
    }

    /// Fetches one playlist's detail and maps it into the domain model.
    async fn playlist_detail(
        &self,
        session: &Session,
        summary: PlaylistSummary,
    ) -> Result<Playlist, ApiError> {
        let endpoint = format!("{}/playlists/{}", config::spotify_apiurl(), summary.id);
        let detail: PlaylistDetail = session
            .authorize(self.http.get(&endpoint))
            .query(&[("fields", PLAYLIST_DETAIL_FIELDS)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(map_playlist(summary.name, detail))
    }
}

/// Maps a playlist detail response into the domain model.
///
/// Track entries that are null or carry no track payload are removed
/// (tombstoned) tracks and are skipped. Artist names default to empty
/// strings and image lists to empty lists when the platform omits them.
pub fn map_playlist(title: String, detail: PlaylistDetail) -> Playlist {
    let songs: Vec<Song> = detail
        .tracks
        .items
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.track)
        .map(|track| Song {
            title: track.name,
            artists: track.artists.into_iter().map(|artist| artist.name).collect(),
            images: track
                .album
                .map(|album| album.images)
                .unwrap_or_default(),
        })
        .collect();

    Playlist {
        title,
        songs,
        images: detail.images,
    }
}
