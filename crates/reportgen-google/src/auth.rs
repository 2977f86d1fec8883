//! OAuth 2.0 service-account flow (JWT bearer grant).
//!
//! The key file's private key signs a short-lived RS256 assertion, which the
//! token endpoint exchanges for an access token. No refresh: the token is
//! fetched once per process and outlives a single pipeline run.

use std::fmt;
use std::path::Path;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reportgen_http::check_status;
use serde::{Deserialize, Serialize};
use tracing::info;
use ureq::Agent;

use crate::client::MAX_BODY_BYTES;
use crate::error::GoogleError;

pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive";
pub const DRIVE_FILE_SCOPE: &str = "https://www.googleapis.com/auth/drive.file";
pub const SCOPES: &[&str] = &[DRIVE_SCOPE, DRIVE_FILE_SCOPE];

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// The fields of a downloaded service-account JSON key that the flow uses.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> Result<Self, GoogleError> {
        let contents = std::fs::read_to_string(path).map_err(|source| GoogleError::KeyFile {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

/// Claims of the signed assertion sent to the token endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Sign the JWT assertion for `key`, issued at `issued_at` (unix seconds).
pub fn build_assertion(
    key: &ServiceAccountKey,
    scopes: &[&str],
    issued_at: i64,
) -> Result<String, GoogleError> {
    let claims = AssertionClaims {
        iss: key.client_email.clone(),
        scope: scopes.join(" "),
        aud: key.token_uri.clone(),
        iat: issued_at,
        exp: issued_at + ASSERTION_LIFETIME_SECS,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())?;
    Ok(encode(&header, &claims, &encoding_key)?)
}

/// Exchange a freshly signed assertion for an access token.
pub fn authenticate(
    agent: &Agent,
    key: &ServiceAccountKey,
    scopes: &[&str],
) -> Result<AccessToken, GoogleError> {
    let assertion = build_assertion(key, scopes, jiff::Timestamp::now().as_second())?;

    info!(client_email = %key.client_email, token_uri = %key.token_uri, "requesting access token");

    let mut response = agent
        .post(key.token_uri.as_str())
        .send_form([("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .map_err(|e| GoogleError::AuthFailed(e.to_string()))?;

    check_status(&mut response, MAX_BODY_BYTES).map_err(|e| GoogleError::AuthFailed(e.to_string()))?;

    let token: AccessToken = response
        .body_mut()
        .read_json()
        .map_err(|e| GoogleError::AuthFailed(format!("unreadable token response: {e}")))?;

    if token.access_token.is_empty() {
        return Err(GoogleError::AuthFailed(
            "token endpoint returned an empty access token".to_string(),
        ));
    }

    info!(expires_in = ?token.expires_in, "access token acquired");

    Ok(token)
}
