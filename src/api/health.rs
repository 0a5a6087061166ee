use axum::response::Json;
use serde_json::{Value, json};

/// Health check for monitoring and deployment verification.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
