use std::path::{Path, PathBuf};

use jiff::civil::DateTime;
use tracing::info;

use reportgen_core::output_names;

use crate::error::ExportError;
use crate::pdf::PdfRenderer;
use crate::render::{load_template, render_report_html};

/// Everything needed to turn generated content into a report file.
#[derive(Debug, Clone)]
pub struct ReportRequest<'a> {
    pub template_path: &'a Path,
    pub content: &'a str,
    pub image_path: Option<&'a Path>,
    pub save_dir: &'a Path,
    /// Timestamp used for the output file name.
    pub at: DateTime,
}

/// Fill the template and render it to `save_dir/report_<timestamp>.pdf`.
///
/// The template is checked before the save directory is created, so a
/// missing template leaves the filesystem untouched.
pub fn generate_report_pdf(
    request: &ReportRequest<'_>,
    renderer: &dyn PdfRenderer,
) -> Result<PathBuf, ExportError> {
    let template = load_template(request.template_path)?;
    let html = render_report_html(&template, request.content, request.image_path)?;

    std::fs::create_dir_all(request.save_dir)?;
    let output = request.save_dir.join(output_names::report_pdf(request.at));

    renderer.render(&html, &output)?;

    info!(path = %output.display(), html_len = html.len(), "report PDF generated");
    Ok(output)
}

/// Render raw HTML straight to `output`, no template involved.
pub fn render_html_to_file(
    html: &str,
    output: &Path,
    renderer: &dyn PdfRenderer,
) -> Result<PathBuf, ExportError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    renderer.render(html, output)?;
    info!(path = %output.display(), "PDF rendered");
    Ok(output.to_path_buf())
}
