use reportgen_http::StatusError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GoogleError {
    #[error("cannot read service account key {path}: {source}")]
    KeyFile {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid service account key: {0}")]
    InvalidKey(#[from] serde_json::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<StatusError> for GoogleError {
    fn from(e: StatusError) -> Self {
        GoogleError::Status {
            status: e.status,
            body: e.body,
        }
    }
}

impl From<ureq::Error> for GoogleError {
    fn from(e: ureq::Error) -> Self {
        GoogleError::Transport(e.to_string())
    }
}
