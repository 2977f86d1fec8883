//! Output file naming conventions.
//!
//! Pure string functions. Names are derived from the local wall-clock time
//! at one-second resolution, so two outputs created within the same second
//! share a name and the later one overwrites the earlier.

use jiff::civil::DateTime;

pub const REPORT_PREFIX: &str = "report";
pub const IMAGE_PREFIX: &str = "image";
pub const LOCAL_OUTPUT_PDF: &str = "local_output.pdf";

/// `2025-03-14_09-26-53` style slug.
pub fn timestamp_slug(at: DateTime) -> String {
    at.strftime("%Y-%m-%d_%H-%M-%S").to_string()
}

pub fn timestamped_file_name(prefix: &str, extension: &str, at: DateTime) -> String {
    format!("{prefix}_{}.{extension}", timestamp_slug(at))
}

pub fn report_pdf(at: DateTime) -> String {
    timestamped_file_name(REPORT_PREFIX, "pdf", at)
}

pub fn generated_image(extension: &str, at: DateTime) -> String {
    timestamped_file_name(IMAGE_PREFIX, extension, at)
}

/// Name of the PDF exported from a hosted document.
pub fn exported_document(doc_id: &str) -> String {
    format!("output_{doc_id}.pdf")
}

/// Current local wall-clock time, the input to every timestamped name.
pub fn now() -> DateTime {
    jiff::Zoned::now().datetime()
}
