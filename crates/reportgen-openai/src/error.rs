use reportgen_http::StatusError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("image payload decoding failed: {0}")]
    Decode(#[from] base64::DecodeError),
}

impl From<StatusError> for OpenAiError {
    fn from(e: StatusError) -> Self {
        OpenAiError::Status {
            status: e.status,
            body: e.body,
        }
    }
}

impl From<ureq::Error> for OpenAiError {
    fn from(e: ureq::Error) -> Self {
        OpenAiError::Transport(e.to_string())
    }
}
