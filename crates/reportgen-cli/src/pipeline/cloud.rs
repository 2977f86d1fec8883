use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use reportgen_core::models::prompt::{Prompt, TEXT_SYSTEM_PROMPT};
use reportgen_export::files::remove_output;
use reportgen_google::{DocumentEditor, DocumentExporter};
use reportgen_openai::ContentGenerator;

use crate::pipeline::steps::{export_pdf, generate_content, update_google_doc};

#[derive(Debug, Clone)]
pub struct CloudRun<'a> {
    pub topic: &'a str,
    pub doc_id: &'a str,
    pub export_dir: &'a Path,
    /// Delete the exported file at the end of the run.
    pub cleanup: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudOutcome {
    /// Status line from the document update; empty when it failed.
    pub update_message: String,
    pub exported: Option<PathBuf>,
}

/// prompt → text → insert into the hosted document → export PDF → local file.
///
/// The export runs even when the insert failed: the document is exported in
/// whatever state it is in. Returns `None` when no content was generated.
pub fn run_cloud(
    text: &dyn ContentGenerator,
    editor: &dyn DocumentEditor,
    exporter: &dyn DocumentExporter,
    run: &CloudRun<'_>,
) -> Option<CloudOutcome> {
    let prompt = match Prompt::checklist_guide(run.topic) {
        Ok(prompt) => prompt,
        Err(e) => {
            error!(error = %e, "invalid topic");
            return None;
        }
    };

    let content = generate_content(text, TEXT_SYSTEM_PROMPT, &prompt);
    if content.is_empty() {
        error!("could not generate content");
        return None;
    }

    let update_message = update_google_doc(editor, run.doc_id, &content);
    let exported = export_pdf(exporter, run.doc_id, run.export_dir);

    info!(update = %update_message, "document step finished");
    match &exported {
        Some(path) => info!(path = %path.display(), "exported PDF saved"),
        None => error!("document export produced no file"),
    }

    if run.cleanup {
        if let Some(path) = &exported {
            match remove_output(path) {
                Ok(true) => {}
                Ok(false) => warn!(path = %path.display(), "exported file already gone"),
                Err(e) => error!(path = %path.display(), error = %e, "removing exported file failed"),
            }
        }
    }

    Some(CloudOutcome {
        update_message,
        exported,
    })
}
