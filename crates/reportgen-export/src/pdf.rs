use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::ExportError;

pub const DEFAULT_WEASYPRINT: &str = "weasyprint";

/// Renders an HTML string into a PDF file.
///
/// The rendered output is not inspected: a renderer that exits cleanly is
/// trusted to have written a usable file.
pub trait PdfRenderer {
    fn render(&self, html: &str, output: &Path) -> Result<(), ExportError>;
}

/// Runs the WeasyPrint command-line tool, feeding the HTML on stdin:
/// `<program> [extra args] [--base-url URL] - <output>`.
#[derive(Debug, Clone)]
pub struct WeasyPrintRenderer {
    program: PathBuf,
    extra_args: Vec<OsString>,
    base_url: Option<String>,
}

impl Default for WeasyPrintRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WEASYPRINT)
    }
}

impl WeasyPrintRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
            base_url: None,
        }
    }

    /// Arguments placed before the input/output pair, e.g.
    /// `--presentational-hints`.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Base URL for resolving relative links in the HTML.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

}

impl PdfRenderer for WeasyPrintRenderer {
    fn render(&self, html: &str, output: &Path) -> Result<(), ExportError> {
        let mut command = Command::new(&self.program);
        command.args(&self.extra_args);
        if let Some(base_url) = &self.base_url {
            command.arg("--base-url").arg(base_url);
        }
        command
            .arg("-")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        debug!(program = %self.program.display(), output = %output.display(), "spawning renderer");

        let mut child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                ExportError::RendererUnavailable(self.program.display().to_string())
            }
            _ => ExportError::Io(e),
        })?;

        // Dropping stdin closes the pipe so the renderer sees end of input.
        // A renderer that exits before reading everything closes its end
        // first; its exit status and stderr below say why.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(html.as_bytes()) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("renderer closed stdin early");
                }
                Err(e) => {
                    drop(stdin);
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ExportError::Io(e));
                }
            }
        }

        let result = child.wait_with_output()?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ExportError::Pdf(format!(
                "{} exited with {}: {}",
                self.program.display(),
                result.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
