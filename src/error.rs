//! Error taxonomy and HTTP response mapping.
//!
//! Every failure a handler can produce falls into one of three kinds:
//! bad request (the caller sent something incomplete or unsupported),
//! unauthorized (the authorization-code exchange was refused), or unhandled
//! (anything the taxonomy did not anticipate, such as upstream transport
//! failures). Handlers return `Result<_, ApiError>` and axum renders the
//! error into the uniform `{"success": false, "error": ...}` envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;

use crate::warning;

#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more required request fields are absent. Carries the missing
    /// field names, comma-space joined, in the order they were checked.
    #[error("`{0}` in request is invalid.")]
    MissingFields(String),

    /// The platform identifier is unknown or has no client implementation.
    #[error("`{0}` not supported.")]
    UnsupportedPlatform(String),

    /// The `playlists` payload of a create request failed schema validation.
    #[error("`playlists` object in request is invalid.")]
    InvalidPlaylists,

    /// Authorization failed: state-nonce mismatch or a refused token
    /// exchange. The diagnostic body from the token endpoint is kept for
    /// the operator log and never shown to the caller.
    #[error("User is unauthorized.")]
    Unauthorized { detail: Option<Value> },

    /// Transport or decoding failure talking to the platform API.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// A condition the taxonomy did not anticipate.
    #[error("{0}")]
    Unhandled(String),
}

impl ApiError {
    /// The HTTP status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_)
            | ApiError::UnsupportedPlatform(_)
            | ApiError::InvalidPlaylists => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(_) | ApiError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // 500s indicate a condition the taxonomy did not anticipate; they
        // must reach the operator log, not just the response envelope.
        if status.is_server_error() {
            warning!("unhandled error while serving request: {}", self);
        }
        if let ApiError::Unauthorized {
            detail: Some(ref body),
        } = self
        {
            warning!("token exchange rejected: {}", body);
        }

        let envelope = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (status, envelope).into_response()
    }
}
