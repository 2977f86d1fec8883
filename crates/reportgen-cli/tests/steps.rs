mod support;

use jiff::civil::date;

use reportgen::pipeline::steps::{
    export_pdf, generate_content, generate_image, generate_pdf, generate_pdf_with_weasyprint,
    update_google_doc,
};
use reportgen_core::models::prompt::{Prompt, TEXT_SYSTEM_PROMPT};
use reportgen_export::report::ReportRequest;
use support::{FakeDocs, FakeImages, FakeRenderer, FakeText};

#[test]
fn failed_generation_yields_empty_string() {
    let prompt = Prompt::new("anything").unwrap();
    assert_eq!(
        generate_content(&FakeText::failing(), TEXT_SYSTEM_PROMPT, &prompt),
        ""
    );
}

#[test]
fn generation_passes_prompts_through() {
    let text = FakeText::replying("Checklist");
    let prompt = Prompt::new("plan my day").unwrap();

    assert_eq!(generate_content(&text, TEXT_SYSTEM_PROMPT, &prompt), "Checklist");
    assert_eq!(
        text.prompts.borrow()[0],
        (TEXT_SYSTEM_PROMPT.to_string(), "plan my day".to_string())
    );
}

#[test]
fn image_is_saved_under_timestamped_name() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("generated_images");

    let path = generate_image(
        &FakeImages::png(b"\x89PNG"),
        "a desk",
        &folder,
        date(2025, 3, 14).at(9, 26, 53, 0),
    )
    .unwrap();

    assert_eq!(path, folder.join("image_2025-03-14_09-26-53.png"));
    assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG");
}

#[test]
fn failed_image_generation_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = generate_image(
        &FakeImages::failing(),
        "a desk",
        dir.path(),
        date(2025, 1, 1).at(0, 0, 0, 0),
    );
    assert!(path.is_none());
}

#[test]
fn document_update_reports_edit_url() {
    let docs = FakeDocs::default();
    let message = update_google_doc(&docs, "doc-42", "Text");

    assert_eq!(
        message,
        "Google Doc Updated: https://docs.google.com/document/d/doc-42/edit"
    );
    assert_eq!(docs.inserted.borrow()[0], ("doc-42".to_string(), "Text".to_string()));
}

#[test]
fn failed_document_update_yields_empty_string() {
    let docs = FakeDocs {
        fail_insert: true,
        ..FakeDocs::default()
    };
    assert_eq!(update_google_doc(&docs, "doc-42", "Text"), "");
}

#[test]
fn export_writes_output_named_after_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_pdf(&FakeDocs::default(), "doc-42", dir.path()).unwrap();

    assert_eq!(path, dir.path().join("output_doc-42.pdf"));
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7 exported");
}

#[test]
fn failed_export_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    let docs = FakeDocs {
        fail_export: true,
        ..FakeDocs::default()
    };
    assert!(export_pdf(&docs, "doc-42", dir.path()).is_none());
    assert!(!dir.path().join("output_doc-42.pdf").exists());
}

#[test]
fn missing_template_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("templates/template.html");
    let renderer = FakeRenderer::default();

    let request = ReportRequest {
        template_path: &template,
        content: "<p>x</p>",
        image_path: None,
        save_dir: dir.path(),
        at: date(2025, 1, 1).at(0, 0, 0, 0),
    };
    assert!(generate_pdf(&renderer, &request).is_none());
    assert!(renderer.rendered.borrow().is_empty());
}

#[test]
fn renderer_failure_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = FakeRenderer {
        fail: true,
        ..FakeRenderer::default()
    };
    let output = dir.path().join("local_output.pdf");

    assert!(generate_pdf_with_weasyprint(&renderer, "<p>x</p>", &output).is_none());
}
