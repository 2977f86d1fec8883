use reportgen_http::default_agent;
use ureq::Agent;

use crate::auth::{AccessToken, SCOPES, ServiceAccountKey, authenticate};
use crate::error::GoogleError;

pub const DOCS_BASE_URL: &str = "https://docs.googleapis.com";
pub const DRIVE_BASE_URL: &str = "https://www.googleapis.com";

/// Upper bound on exported PDFs and error bodies.
pub(crate) const MAX_BODY_BYTES: u64 = 256 * 1024 * 1024;

/// Authenticated handle for the Docs and Drive REST APIs.
#[derive(Clone)]
pub struct GoogleClient {
    pub(crate) agent: Agent,
    pub(crate) token: AccessToken,
    pub(crate) docs_base_url: String,
    pub(crate) drive_base_url: String,
}

impl GoogleClient {
    pub fn new(agent: Agent, token: AccessToken) -> Self {
        Self {
            agent,
            token,
            docs_base_url: DOCS_BASE_URL.to_string(),
            drive_base_url: DRIVE_BASE_URL.to_string(),
        }
    }

    /// Authenticate with the drive scopes and return a ready client.
    pub fn connect(key: &ServiceAccountKey) -> Result<Self, GoogleError> {
        let agent = default_agent();
        let token = authenticate(&agent, key, SCOPES)?;
        Ok(Self::new(agent, token))
    }

    /// Point both APIs at another host (used against local test servers).
    pub fn with_base_urls(mut self, docs: impl Into<String>, drive: impl Into<String>) -> Self {
        self.docs_base_url = docs.into();
        self.drive_base_url = drive.into();
        self
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.token.access_token)
    }
}

/// Browser URL of a hosted document.
pub fn document_url(doc_id: &str) -> String {
    format!("https://docs.google.com/document/d/{doc_id}/edit")
}
