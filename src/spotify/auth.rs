use reqwest::{StatusCode, Url, header::AUTHORIZATION};
use serde_json::Value;

use crate::error::ApiError;
use crate::spotify::{AUTHORIZATION_SCOPE, SpotifyClient};
use crate::types::Session;
use crate::{config, utils};

impl SpotifyClient {
    /// Builds the consent-screen URL for the authorization-code flow.
    ///
    /// Embeds the application client id, the fixed permission scope, the
    /// caller-supplied redirect uri, and the anti-forgery state nonce that
    /// [`SpotifyClient::exchange_code`] later verifies. Issues no network
    /// call.
    pub fn authorization_url(&self, redirect_uri: &str) -> Result<String, ApiError> {
        let base = format!("{}/authorize", config::spotify_accounts_url());
        let mut url = Url::parse(&base)
            .map_err(|e| ApiError::Unhandled(format!("invalid authorization url: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("scope", AUTHORIZATION_SCOPE)
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("state", &self.state_nonce);

        Ok(url.into())
    }

    /// Exchanges an authorization code for an authenticated session.
    ///
    /// The state returned by the consent redirect must match the nonce this
    /// process issued; the check happens before any network call so a forged
    /// callback never reaches the token endpoint. The exchange itself POSTs
    /// the code with Basic client authentication and requires an HTTP 200
    /// response carrying both an access and a refresh token. Anything else
    /// is an authorization failure, with the response body kept for the
    /// operator log.
    pub async fn exchange_code(
        &self,
        code: &str,
        state: &str,
        redirect_uri: &str,
    ) -> Result<Session, ApiError> {
        if state != self.state_nonce {
            return Err(ApiError::Unauthorized { detail: None });
        }

        let credentials = utils::encode_basic_credentials(&self.client_id, &self.client_secret);
        let endpoint = format!("{}/api/token", config::spotify_accounts_url());

        let response = self
            .http
            .post(&endpoint)
            .header(AUTHORIZATION, format!("Basic {}", credentials))
            .form(&[
                ("code", code),
                ("grant_type", "authorization_code"),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;

        let access_token = body.get("access_token").and_then(Value::as_str);
        let refresh_token = body.get("refresh_token").and_then(Value::as_str);

        match (access_token, refresh_token) {
            (Some(access), Some(refresh)) if status == StatusCode::OK => Ok(Session {
                access_token: access.to_string(),
                refresh_token: refresh.to_string(),
            }),
            _ => Err(ApiError::Unauthorized { detail: Some(body) }),
        }
    }
}
