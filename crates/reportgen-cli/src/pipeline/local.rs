use std::path::PathBuf;

use jiff::civil::DateTime;
use tracing::{debug, error, info, warn};

use reportgen_core::models::content::strip_code_fences;
use reportgen_core::models::prompt::{HTML_SYSTEM_PROMPT, Prompt};
use reportgen_export::pdf::PdfRenderer;
use reportgen_export::report::ReportRequest;
use reportgen_openai::{ContentGenerator, ImageGenerator};

use crate::config::Paths;
use crate::pipeline::steps::{
    generate_content, generate_image, generate_pdf, generate_pdf_with_weasyprint,
};

/// Inputs for one run of the local HTML report pipeline.
#[derive(Debug, Clone)]
pub struct LocalRun<'a> {
    pub topic: &'a str,
    /// When set, an image is generated and embedded instead of
    /// [`Paths::default_image`].
    pub image_prompt: Option<&'a str>,
    pub paths: &'a Paths,
    pub at: DateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalOutcome {
    pub report: Option<PathBuf>,
    pub raw: Option<PathBuf>,
}

/// prompt → HTML → strip fences → template → PDF, plus an untemplated PDF
/// of the same HTML.
///
/// Returns `None` when no content was generated; nothing is rendered then.
pub fn run_local(
    text: &dyn ContentGenerator,
    images: &dyn ImageGenerator,
    renderer: &dyn PdfRenderer,
    run: &LocalRun<'_>,
) -> Option<LocalOutcome> {
    let prompt = match Prompt::html_document(run.topic) {
        Ok(prompt) => prompt,
        Err(e) => {
            error!(error = %e, "invalid topic");
            return None;
        }
    };

    let content = generate_content(text, HTML_SYSTEM_PROMPT, &prompt);
    if content.is_empty() {
        error!("could not generate content");
        return None;
    }
    let html = strip_code_fences(&content);
    debug!(html_len = html.len(), "content generated");

    let image_path = match run.image_prompt {
        Some(image_prompt) => generate_image(images, image_prompt, &run.paths.image_folder, run.at),
        None => Some(run.paths.default_image.clone()),
    };
    if image_path.is_none() {
        warn!("no image available, the PDF will have no image");
    }

    let request = ReportRequest {
        template_path: &run.paths.template,
        content: &html,
        image_path: image_path.as_deref(),
        save_dir: &run.paths.save_folder,
        at: run.at,
    };
    let report = generate_pdf(renderer, &request);
    let raw = generate_pdf_with_weasyprint(renderer, &html, &run.paths.local_output);

    match &report {
        Some(path) => {
            info!(path = %path.display(), "report saved");
            if let Some(raw) = &raw {
                info!(path = %raw.display(), "local PDF saved");
            }
        }
        None => error!("could not create the report PDF"),
    }

    Some(LocalOutcome { report, raw })
}
