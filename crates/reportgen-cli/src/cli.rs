use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "reportgen", version, about = "Generate PDF reports from a text prompt")]
pub struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate HTML, fill the local template and render PDFs with WeasyPrint.
    Local(LocalArgs),
    /// Generate text, insert it into the hosted document and export it as PDF.
    Cloud(CloudArgs),
}

#[derive(Debug, Default, Args)]
pub struct LocalArgs {
    /// Topic of the generated document.
    #[arg(long)]
    pub prompt: Option<String>,

    /// Generate an illustration from this prompt and embed it.
    #[arg(long)]
    pub image_prompt: Option<String>,

    /// HTML template with `{content}` and `{image}` placeholders.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Directory for timestamped report PDFs.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Args)]
pub struct CloudArgs {
    /// Topic of the generated guide.
    #[arg(long)]
    pub prompt: Option<String>,

    /// Delete the exported PDF once the run finishes.
    #[arg(long)]
    pub cleanup: bool,
}
