use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};

/// Encodes a client credential pair for an HTTP Basic authorization header.
///
/// Produces `base64("<client_id>:<client_secret>")` as required by the
/// token endpoint's client authentication.
pub fn encode_basic_credentials(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", client_id, client_secret))
}

/// Generates a random alphanumeric anti-forgery state nonce.
pub fn generate_state_nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Extracts the trailing id from a colon-delimited platform resource
/// identifier of the form `spotify:type:id`.
///
/// A uri without colons is returned unchanged.
pub fn id_from_uri(uri: &str) -> &str {
    uri.split(':').next_back().unwrap_or(uri)
}
