use std::collections::HashMap;

use axum::response::Json;
use axum::{Extension, extract::Query};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::platform::Platform;
use crate::spotify::MusicClient;
use crate::types::{Playlist, SharedState};
use crate::validator::{self, RequestKind};

/// Lists the caller's playlists on the platform named in the request.
///
/// Requires `platform`, `code`, `state` and `redirect_uri` query parameters;
/// `code` and `state` come from the platform's consent redirect and feed the
/// authorization-code exchange inside the client.
pub async fn get_playlists(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<SharedState>,
) -> Result<Json<Value>, ApiError> {
    validator::require(RequestKind::GetPlaylists, &params, &Value::Null)?;

    let platform = Platform::parse(&params["platform"])?;
    let client = MusicClient::for_platform(platform, &state)?;
    let playlists = client.get_playlists(&params, &params["redirect_uri"]).await?;

    Ok(Json(json!({
        "success": true,
        "playlists": playlists,
    })))
}

/// Creates playlists on the platform named in the request context.
///
/// The body must carry a `playlists` array matching the playlist schema and
/// a `context.platform` identifier. Schema validation happens before client
/// resolution so a malformed payload is rejected regardless of platform.
pub async fn post_playlists(
    Extension(state): Extension<SharedState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    validator::require(RequestKind::PostPlaylists, &HashMap::new(), &body)?;

    let validated: Vec<Playlist> = serde_json::from_value(body["playlists"].clone())
        .map_err(|_| ApiError::InvalidPlaylists)?;

    let platform = Platform::parse(&platform_name(&body))?;
    let client = MusicClient::for_platform(platform, &state)?;
    let created = client.create_playlists(validated).await?;

    Ok(Json(json!({
        "success": true,
        "playlists": created,
    })))
}

/// Pulls the platform identifier out of the request context. Presence is
/// already validated; a non-string value is passed through verbatim so the
/// unsupported-platform error names what the caller sent.
fn platform_name(body: &Value) -> String {
    match &body["context"]["platform"] {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}
