use reportgen_http::check_status;
use serde::Serialize;
use tracing::info;

use crate::client::{GoogleClient, MAX_BODY_BYTES};
use crate::error::GoogleError;

/// Index right after the implicit section break at the start of every
/// document body.
pub const DOCUMENT_START_INDEX: u32 = 1;

pub trait DocumentEditor {
    /// Insert `text` at the start of the document body.
    fn insert_text(&self, doc_id: &str, text: &str) -> Result<(), GoogleError>;
}

#[derive(Debug, Serialize)]
pub struct BatchUpdateRequest<'a> {
    pub requests: Vec<EditRequest<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EditRequest<'a> {
    InsertText { location: Location, text: &'a str },
}

#[derive(Debug, Serialize)]
pub struct Location {
    pub index: u32,
}

impl<'a> BatchUpdateRequest<'a> {
    pub fn insert_at_start(text: &'a str) -> Self {
        Self {
            requests: vec![EditRequest::InsertText {
                location: Location {
                    index: DOCUMENT_START_INDEX,
                },
                text,
            }],
        }
    }
}

impl DocumentEditor for GoogleClient {
    fn insert_text(&self, doc_id: &str, text: &str) -> Result<(), GoogleError> {
        let url = format!(
            "{}/v1/documents/{doc_id}:batchUpdate",
            self.docs_base_url.trim_end_matches('/')
        );

        info!(doc_id, text_len = text.len(), "inserting text into document");

        let mut response = self
            .agent
            .post(url)
            .header("Authorization", self.bearer())
            .send_json(&BatchUpdateRequest::insert_at_start(text))?;
        check_status(&mut response, MAX_BODY_BYTES)?;

        info!(doc_id, "document updated");
        Ok(())
    }
}
