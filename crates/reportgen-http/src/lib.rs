//! reportgen-http
//!
//! Agent construction and status handling shared by the API clients.

#[cfg(feature = "test-support")]
pub mod testing;

use thiserror::Error;
use ureq::http::Response;
use ureq::{Agent, Body};

/// A non-2xx response, with as much of its body as could be read.
#[derive(Debug, Error)]
#[error("HTTP {status}: {body}")]
pub struct StatusError {
    pub status: u16,
    pub body: String,
}

/// Agent that reports HTTP error statuses as responses so the body can be
/// surfaced in a [`StatusError`].
pub fn default_agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .into()
}

/// Turn a non-2xx response into a [`StatusError`], reading at most `limit`
/// bytes of its body.
pub fn check_status(response: &mut Response<Body>, limit: u64) -> Result<(), StatusError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response
        .body_mut()
        .with_config()
        .limit(limit)
        .read_to_string()
        .unwrap_or_default();
    Err(StatusError {
        status: status.as_u16(),
        body,
    })
}
