use std::path::Path;

use url::Url;

use crate::error::CoreError;

pub const CONTENT_PLACEHOLDER: &str = "{content}";
pub const IMAGE_PLACEHOLDER: &str = "{image}";

/// A static HTML page with `{content}` and `{image}` placeholders.
///
/// Substitution is literal: every occurrence is replaced and nothing is
/// escaped. A template without a placeholder simply leaves it unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTemplate {
    source: String,
}

impl HtmlTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn has_content_slot(&self) -> bool {
        self.source.contains(CONTENT_PLACEHOLDER)
    }

    pub fn has_image_slot(&self) -> bool {
        self.source.contains(IMAGE_PLACEHOLDER)
    }

    /// Substitute the content first, then the image tag.
    ///
    /// Because replacement is sequential, an `{image}` token that appears
    /// inside `content` is replaced as well.
    pub fn render(&self, content: &str, image_tag: &str) -> String {
        self.source
            .replace(CONTENT_PLACEHOLDER, content)
            .replace(IMAGE_PLACEHOLDER, image_tag)
    }
}

/// Build the `<img>` element embedded in a report for a local image file.
///
/// The path is made absolute against the current directory and emitted as a
/// percent-encoded `file://` URL so the renderer resolves it regardless of
/// its base URL.
pub fn image_tag(path: &Path) -> Result<String, CoreError> {
    let absolute = std::path::absolute(path).map_err(|source| CoreError::PathResolve {
        path: path.display().to_string(),
        source,
    })?;
    let url = Url::from_file_path(&absolute)
        .map_err(|()| CoreError::FileUrl(absolute.display().to_string()))?;
    Ok(format!(
        "<img src=\"{url}\" alt=\"Generated Image\" style=\"width:100%;\">"
    ))
}
