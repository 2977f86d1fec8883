use std::path::{Path, PathBuf};

use jiff::civil::DateTime;
use tracing::{error, info};

use reportgen_core::models::prompt::Prompt;
use reportgen_core::output_names;
use reportgen_export::files::write_bytes;
use reportgen_export::pdf::PdfRenderer;
use reportgen_export::report::{ReportRequest, generate_report_pdf, render_html_to_file};
use reportgen_google::client::document_url;
use reportgen_google::{DocumentEditor, DocumentExporter};
use reportgen_openai::{ContentGenerator, ImageGenerator, OpenAiError};

/// Generated text, or an empty string when the call failed.
pub fn generate_content(
    generator: &dyn ContentGenerator,
    system_prompt: &str,
    prompt: &Prompt,
) -> String {
    match generator.generate(system_prompt, prompt.as_str()) {
        Ok(text) => text,
        Err(OpenAiError::Transport(e)) => {
            error!(error = %e, "network problem during content generation");
            String::new()
        }
        Err(e) => {
            error!(error = %e, "content generation failed");
            String::new()
        }
    }
}

/// Generate an image and save it as `folder/image_<timestamp>.<ext>`.
pub fn generate_image(
    generator: &dyn ImageGenerator,
    prompt: &str,
    folder: &Path,
    at: DateTime,
) -> Option<PathBuf> {
    let image = match generator.generate_image(prompt) {
        Ok(image) => image,
        Err(e) => {
            error!(error = %e, "image generation failed");
            return None;
        }
    };

    let file_name = output_names::generated_image(&image.extension, at);
    match write_bytes(folder, &file_name, &image.bytes) {
        Ok(path) => {
            info!(path = %path.display(), "image saved");
            Some(path)
        }
        Err(e) => {
            error!(error = %e, "saving generated image failed");
            None
        }
    }
}

/// Insert `content` at the start of the document. Returns a status line with
/// the document URL, or an empty string on failure.
pub fn update_google_doc(editor: &dyn DocumentEditor, doc_id: &str, content: &str) -> String {
    match editor.insert_text(doc_id, content) {
        Ok(()) => format!("Google Doc Updated: {}", document_url(doc_id)),
        Err(e) => {
            error!(doc_id, error = %e, "updating document failed");
            String::new()
        }
    }
}

/// Export the document and write it to `dir/output_<doc_id>.pdf`.
pub fn export_pdf(exporter: &dyn DocumentExporter, doc_id: &str, dir: &Path) -> Option<PathBuf> {
    let bytes = match exporter.export_pdf(doc_id) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(doc_id, error = %e, "document export failed");
            return None;
        }
    };

    match write_bytes(dir, &output_names::exported_document(doc_id), &bytes) {
        Ok(path) => {
            info!(path = %path.display(), "document exported");
            Some(path)
        }
        Err(e) => {
            error!(doc_id, error = %e, "writing exported document failed");
            None
        }
    }
}

/// Templated report PDF, or `None` when any part of rendering failed.
pub fn generate_pdf(renderer: &dyn PdfRenderer, request: &ReportRequest<'_>) -> Option<PathBuf> {
    generate_report_pdf(request, renderer)
        .inspect_err(|e| error!(error = %e, "report PDF generation failed"))
        .ok()
}

/// Raw HTML rendered to `output`, or `None` on failure.
pub fn generate_pdf_with_weasyprint(
    renderer: &dyn PdfRenderer,
    html: &str,
    output: &Path,
) -> Option<PathBuf> {
    render_html_to_file(html, output, renderer)
        .inspect_err(|e| error!(output = %output.display(), error = %e, "local PDF generation failed"))
        .ok()
}
