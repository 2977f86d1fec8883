use reportgen_http::check_status;
use tracing::info;

use crate::client::{GoogleClient, MAX_BODY_BYTES};
use crate::error::GoogleError;

pub const PDF_MIME_TYPE: &str = "application/pdf";

pub trait DocumentExporter {
    /// Export a hosted document as PDF bytes.
    fn export_pdf(&self, doc_id: &str) -> Result<Vec<u8>, GoogleError>;
}

impl DocumentExporter for GoogleClient {
    fn export_pdf(&self, doc_id: &str) -> Result<Vec<u8>, GoogleError> {
        let url = format!(
            "{}/drive/v3/files/{doc_id}/export",
            self.drive_base_url.trim_end_matches('/')
        );

        info!(doc_id, "exporting document as PDF");

        let mut response = self
            .agent
            .get(url)
            .query("mimeType", PDF_MIME_TYPE)
            .header("Authorization", self.bearer())
            .call()?;
        check_status(&mut response, MAX_BODY_BYTES)?;

        let bytes = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()?;

        info!(doc_id, bytes = bytes.len(), "document exported");
        Ok(bytes)
    }
}
