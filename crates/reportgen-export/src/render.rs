use std::path::Path;

use tracing::warn;

use reportgen_core::models::template::{HtmlTemplate, image_tag};

use crate::error::ExportError;

/// Read an HTML template from disk.
pub fn load_template(path: &Path) -> Result<HtmlTemplate, ExportError> {
    if !path.exists() {
        return Err(ExportError::TemplateNotFound(path.display().to_string()));
    }
    let source = std::fs::read_to_string(path).map_err(|source| ExportError::TemplateRead {
        path: path.display().to_string(),
        source,
    })?;
    Ok(HtmlTemplate::new(source))
}

/// Substitute `content` and, when the image file exists, an `<img>` tag.
///
/// A missing image is not an error: the `{image}` slot is emptied instead.
pub fn render_report_html(
    template: &HtmlTemplate,
    content: &str,
    image_path: Option<&Path>,
) -> Result<String, ExportError> {
    let tag = match image_path {
        Some(path) if path.exists() => image_tag(path)?,
        Some(path) => {
            warn!(path = %path.display(), "image not found, rendering without it");
            String::new()
        }
        None => String::new(),
    };
    Ok(template.render(content, &tag))
}
