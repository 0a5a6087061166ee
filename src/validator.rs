//! Request field-presence validation.
//!
//! Handlers run this gate before touching any platform client: each logical
//! operation declares the fields it needs, and a request missing any of them
//! is rejected up front with a bad-request error naming the missing fields
//! in the order they were checked. Presence is all that is verified here;
//! type and value problems surface later in the handler or the client.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::ApiError;

/// The logical operation a request maps to, naming its required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// `GET /playlists` - query: platform, code, state, redirect_uri.
    GetPlaylists,
    /// `POST /playlists` - body: playlists, context, context.platform.
    PostPlaylists,
    /// `GET /auth` - query: platform, redirect_uri.
    GetAuth,
}

/// Returns the names of required fields absent from the request, in the
/// order they are checked.
pub fn missing_fields(
    kind: RequestKind,
    query: &HashMap<String, String>,
    body: &Value,
) -> Vec<&'static str> {
    let mut missing = Vec::new();

    match kind {
        RequestKind::GetPlaylists => {
            for field in ["platform", "code", "state", "redirect_uri"] {
                if !query.contains_key(field) {
                    missing.push(field);
                }
            }
        }
        RequestKind::PostPlaylists => {
            for field in ["playlists", "context"] {
                if body.get(field).is_none() {
                    missing.push(field);
                }
            }
            // A missing context also reports its nested platform field.
            let has_platform = body
                .get("context")
                .and_then(|context| context.get("platform"))
                .is_some();
            if !has_platform {
                missing.push("platform");
            }
        }
        RequestKind::GetAuth => {
            for field in ["platform", "redirect_uri"] {
                if !query.contains_key(field) {
                    missing.push(field);
                }
            }
        }
    }

    missing
}

/// Validation gate: short-circuits with a bad-request error when any
/// required field is absent.
pub fn require(
    kind: RequestKind,
    query: &HashMap<String, String>,
    body: &Value,
) -> Result<(), ApiError> {
    let missing = missing_fields(kind, query, body);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::MissingFields(missing.join(", ")))
    }
}
