use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, error, types::SharedState};

/// Starts the HTTP server on `addr` and serves until the process exits.
///
/// All routes share the read-only application state (credentials and the
/// process-wide state nonce) via an extension layer.
pub async fn start_api_server(addr: &str, state: SharedState) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/playlists", get(api::get_playlists).post(api::post_playlists))
        .route("/auth", get(api::get_auth))
        .layer(Extension(state));

    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
