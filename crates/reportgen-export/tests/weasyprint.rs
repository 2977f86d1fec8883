use reportgen_export::error::ExportError;
use reportgen_export::pdf::{PdfRenderer, WeasyPrintRenderer};

#[test]
fn missing_program_is_reported_as_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = WeasyPrintRenderer::new("/nonexistent/bin/weasyprint");

    let err = renderer
        .render("<p>x</p>", &dir.path().join("out.pdf"))
        .unwrap_err();
    assert!(matches!(err, ExportError::RendererUnavailable(_)));
}

#[cfg(unix)]
#[test]
fn html_is_piped_on_stdin_and_output_path_passed_last() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.pdf");
    // `sh -c SCRIPT sh - <output>`: $1 is the stdin marker, $2 the output.
    let renderer = WeasyPrintRenderer::new("sh").with_args(["-c", "cat > \"$2\"", "sh"]);

    renderer.render("<h1>Report</h1>", &output).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "<h1>Report</h1>");
}

#[cfg(unix)]
#[test]
fn base_url_is_passed_before_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("args.txt");
    let renderer = WeasyPrintRenderer::new("sh")
        .with_args(["-c", "cat > /dev/null; echo \"$1 $2 $3\" > \"$4\"", "sh"])
        .with_base_url("file:///srv/reports/");

    renderer.render("<p/>", &output).unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap().trim(),
        "--base-url file:///srv/reports/ -"
    );
}

#[cfg(unix)]
#[test]
fn non_zero_exit_carries_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = WeasyPrintRenderer::new("sh")
        .with_args(["-c", "cat > /dev/null; echo 'bad html' >&2; exit 3", "sh"]);

    let err = renderer
        .render("<p>x</p>", &dir.path().join("out.pdf"))
        .unwrap_err();
    match err {
        ExportError::Pdf(msg) => assert!(msg.contains("bad html")),
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[test]
fn early_exit_on_large_input_still_carries_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = WeasyPrintRenderer::new("sh")
        .with_args(["-c", "echo 'invalid option' >&2; exit 2", "sh"]);
    let html = format!("<p>{}</p>", "x".repeat(1024 * 1024));

    let err = renderer
        .render(&html, &dir.path().join("out.pdf"))
        .unwrap_err();
    match err {
        ExportError::Pdf(msg) => {
            assert!(msg.contains("invalid option"));
            assert!(msg.contains("exit status: 2"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
