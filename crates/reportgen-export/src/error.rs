use thiserror::Error;

use reportgen_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template read failed for {path}: {source}")]
    TemplateRead {
        path: String,
        source: std::io::Error,
    },

    #[error("PDF renderer not available: {0}")]
    RendererUnavailable(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
