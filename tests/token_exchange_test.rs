use axum::http::StatusCode;
use axum::response::Json;
use axum::{Router, routing::post};
use playlistmover::config::Config;
use playlistmover::error::ApiError;
use playlistmover::spotify::SpotifyClient;
use playlistmover::types::AppState;
use serde_json::{Value, json};

const NONCE: &str = "123456789abcdefg";

fn test_client() -> SpotifyClient {
    let state = AppState {
        config: Config {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
        },
        state_nonce: NONCE.to_string(),
    };
    SpotifyClient::new(&state).unwrap()
}

/// Serves a canned token-endpoint response on an ephemeral port and returns
/// the base URL to point `SPOTIFY_ACCOUNTS_URL` at.
async fn spawn_token_stub(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/api/token",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn point_accounts_url_at(base: &str) {
    // This binary holds exactly one test and runs on a current-thread
    // runtime, so no other thread reads the environment concurrently.
    unsafe { std::env::set_var("SPOTIFY_ACCOUNTS_URL", base) };
}

#[tokio::test]
async fn test_exchange_rejects_unusable_token_responses() {
    let client = test_client();

    // HTTP 200 but no refresh_token: no session may be produced.
    let base = spawn_token_stub(
        StatusCode::OK,
        json!({ "access_token": "this_is_dummy_access_token" }),
    )
    .await;
    point_accounts_url_at(&base);

    let err = client
        .exchange_code("DummyCode", NONCE, "https://app/callback")
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(err.to_string(), "User is unauthorized.");
    assert!(matches!(err, ApiError::Unauthorized { detail: Some(_) }));

    // Non-200 status: rejected even when the body carries both tokens.
    let base = spawn_token_stub(
        StatusCode::BAD_REQUEST,
        json!({
            "access_token": "this_is_dummy_access_token",
            "refresh_token": "this_is_dummy_refresh_token",
            "error": "invalid_grant",
        }),
    )
    .await;
    point_accounts_url_at(&base);

    let err = client
        .exchange_code("DummyCode", NONCE, "https://app/callback")
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    assert!(matches!(err, ApiError::Unauthorized { detail: Some(_) }));

    // The diagnostic body is kept for the operator log, not the caller.
    if let ApiError::Unauthorized { detail: Some(body) } = err {
        assert_eq!(body["error"], "invalid_grant");
    }
}
