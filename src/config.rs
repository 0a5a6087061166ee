//! Configuration management for the playlistmover service.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the working directory. The Spotify application credentials
//! are required and read exactly once at startup; endpoint URLs and the
//! listen address have sensible defaults and only need overriding for
//! development or testing against a stand-in API.

use std::env;

/// Spotify application credentials, read once at startup.
///
/// Both values come from the Spotify developer dashboard. Missing variables
/// are a startup error rather than a malformed request later on.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
}

impl Config {
    /// Reads `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` from the
    /// environment, failing with the name of the first missing variable.
    pub fn from_env() -> Result<Self, String> {
        let client_id =
            env::var("SPOTIFY_CLIENT_ID").map_err(|_| "SPOTIFY_CLIENT_ID must be set")?;
        let client_secret =
            env::var("SPOTIFY_CLIENT_SECRET").map_err(|_| "SPOTIFY_CLIENT_SECRET must be set")?;
        Ok(Config {
            client_id,
            client_secret,
        })
    }
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are ignored; real environment variables always win over
/// file entries.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the address the HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to `127.0.0.1:8080`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Returns the base URL of the Spotify accounts service.
///
/// Hosts the `/authorize` consent screen and the `/api/token` exchange
/// endpoint. Reads `SPOTIFY_ACCOUNTS_URL`, defaulting to the production
/// service.
pub fn spotify_accounts_url() -> String {
    env::var("SPOTIFY_ACCOUNTS_URL").unwrap_or_else(|_| "https://accounts.spotify.com".to_string())
}

/// Returns the base URL of the Spotify Web API.
///
/// Reads `SPOTIFY_API_URL`, defaulting to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}
