use std::collections::HashMap;

use axum::response::Json;
use axum::{Extension, extract::Query};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::platform::Platform;
use crate::spotify::MusicClient;
use crate::types::SharedState;
use crate::validator::{self, RequestKind};

/// Returns the consent-screen URL the caller should send the user to.
///
/// Responds with the URL in the payload rather than redirecting, so the API
/// stays usable outside a browser context.
pub async fn get_auth(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<SharedState>,
) -> Result<Json<Value>, ApiError> {
    validator::require(RequestKind::GetAuth, &params, &Value::Null)?;

    let platform = Platform::parse(&params["platform"])?;
    let client = MusicClient::for_platform(platform, &state)?;
    let auth_url = client.authorization_url(&params["redirect_uri"])?;

    Ok(Json(json!({
        "success": true,
        "auth_url": auth_url,
    })))
}
