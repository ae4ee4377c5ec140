//! Client-credential exchange against the token endpoint

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::config::{api, env_vars};
use crate::error::{FlatfileError, Result};
use crate::flatfile::client::ApiEnv;
use crate::flatfile::decode::{require, require_str, JsonShape};

/// Credential pair read from the environment
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub secret: String,
}

impl Credentials {
    /// Read credentials from `FLATFILE_CLIENT_ID` / `FLATFILE_SECRET`
    ///
    /// Missing variables load as empty strings; `validate` rejects those
    /// before any network call is made.
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var(env_vars::CLIENT_ID).unwrap_or_default(),
            secret: std::env::var(env_vars::SECRET).unwrap_or_default(),
        }
    }

    /// Reject empty credentials with a configuration error
    pub fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() || self.secret.is_empty() {
            return Err(FlatfileError::Config(format!(
                "ensure both {} and {} env vars are set and non-empty",
                env_vars::CLIENT_ID,
                env_vars::SECRET
            )));
        }
        Ok(())
    }
}

/// Token exchange response envelope
#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub data: TokenData,
}

/// Inner token payload
#[derive(Deserialize, Debug)]
pub struct TokenData {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

impl JsonShape for TokenResponse {
    fn check(value: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(data) = require(value, "data", &mut errors) {
            require_str(data, "accessToken", &mut errors);
        }
        errors
    }
}

/// Exchange credentials for an access token
///
/// POSTs the credential pair to the exchange endpoint and extracts the
/// access token from the decoded response. Taxonomy errors propagate
/// unchanged; an empty token is an authentication failure.
pub async fn create_token(env: &ApiEnv, creds: &Credentials) -> Result<String> {
    debug!("Exchanging credentials for an access token");

    let body = serde_json::json!({
        "clientId": creds.client_id,
        "secret": creds.secret,
    });
    let response: TokenResponse = env.post_json(api::AUTH_EXCHANGE, body).await?;

    if response.data.access_token.is_empty() {
        return Err(FlatfileError::Auth(
            "token exchange returned no token".to_string(),
        ));
    }
    Ok(response.data.access_token)
}
