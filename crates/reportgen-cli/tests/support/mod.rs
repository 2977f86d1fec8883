//! In-process stand-ins for the external services.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use reportgen_export::error::ExportError;
use reportgen_export::pdf::PdfRenderer;
use reportgen_google::{DocumentEditor, DocumentExporter, GoogleError};
use reportgen_openai::{ContentGenerator, GeneratedImage, ImageGenerator, OpenAiError};

/// Returns a fixed reply, or fails when `reply` is `None`.
pub struct FakeText {
    pub reply: Option<String>,
    pub prompts: RefCell<Vec<(String, String)>>,
}

impl FakeText {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl ContentGenerator for FakeText {
    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, OpenAiError> {
        self.prompts
            .borrow_mut()
            .push((system_prompt.to_string(), user_prompt.to_string()));
        self.reply
            .clone()
            .ok_or_else(|| OpenAiError::Transport("connection refused".to_string()))
    }
}

pub struct FakeImages {
    pub image: Option<GeneratedImage>,
    pub calls: Cell<usize>,
}

impl FakeImages {
    pub fn png(bytes: &[u8]) -> Self {
        Self {
            image: Some(GeneratedImage {
                bytes: bytes.to_vec(),
                extension: "png".to_string(),
            }),
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            image: None,
            calls: Cell::new(0),
        }
    }
}

impl ImageGenerator for FakeImages {
    fn generate_image(&self, _prompt: &str) -> Result<GeneratedImage, OpenAiError> {
        self.calls.set(self.calls.get() + 1);
        self.image.clone().ok_or_else(|| OpenAiError::Status {
            status: 400,
            body: "content policy".to_string(),
        })
    }
}

/// Writes the received HTML to the output path and records it.
#[derive(Default)]
pub struct FakeRenderer {
    pub fail: bool,
    pub rendered: RefCell<Vec<(String, PathBuf)>>,
}

impl PdfRenderer for FakeRenderer {
    fn render(&self, html: &str, output: &Path) -> Result<(), ExportError> {
        if self.fail {
            return Err(ExportError::Pdf("renderer crashed".to_string()));
        }
        std::fs::write(output, html)?;
        self.rendered
            .borrow_mut()
            .push((html.to_string(), output.to_path_buf()));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeDocs {
    pub fail_insert: bool,
    pub fail_export: bool,
    pub inserted: RefCell<Vec<(String, String)>>,
    pub exports: Cell<usize>,
}

impl DocumentEditor for FakeDocs {
    fn insert_text(&self, doc_id: &str, text: &str) -> Result<(), GoogleError> {
        if self.fail_insert {
            return Err(GoogleError::Status {
                status: 403,
                body: "PERMISSION_DENIED".to_string(),
            });
        }
        self.inserted
            .borrow_mut()
            .push((doc_id.to_string(), text.to_string()));
        Ok(())
    }
}

impl DocumentExporter for FakeDocs {
    fn export_pdf(&self, _doc_id: &str) -> Result<Vec<u8>, GoogleError> {
        self.exports.set(self.exports.get() + 1);
        if self.fail_export {
            return Err(GoogleError::Transport("timed out".to_string()));
        }
        Ok(b"%PDF-1.7 exported".to_vec())
    }
}
