//! Supported music streaming platform identifiers.

use std::fmt;

use crate::error::ApiError;

/// A music streaming platform a caller can address in a request.
///
/// Parsing is case-insensitive on the canonical names; only Spotify has a
/// working client implementation, the other members deterministically fail
/// client resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Spotify,
    AppleMusic,
    YoutubeMusic,
}

impl Platform {
    /// Parses a platform identifier from caller input.
    ///
    /// Unrecognized values fail with a bad-request error naming the value
    /// exactly as the caller sent it.
    pub fn parse(value: &str) -> Result<Platform, ApiError> {
        match value.to_ascii_uppercase().as_str() {
            "SPOTIFY" => Ok(Platform::Spotify),
            "APPLE_MUSIC" => Ok(Platform::AppleMusic),
            "YOUTUBE_MUSIC" => Ok(Platform::YoutubeMusic),
            _ => Err(ApiError::UnsupportedPlatform(value.to_string())),
        }
    }

    /// The canonical identifier used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Spotify => "SPOTIFY",
            Platform::AppleMusic => "APPLE_MUSIC",
            Platform::YoutubeMusic => "YOUTUBE_MUSIC",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
