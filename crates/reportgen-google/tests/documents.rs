use reportgen_google::auth::AccessToken;
use reportgen_google::client::document_url;
use reportgen_google::docs::BatchUpdateRequest;
use reportgen_google::{DocumentEditor, DocumentExporter, GoogleClient, GoogleError};
use reportgen_http::testing::{Canned, refused_url, serve_once, test_agent};

fn client_for(base_url: &str) -> GoogleClient {
    let token = AccessToken {
        access_token: "ya29.test".to_string(),
        expires_in: Some(3600),
        token_type: Some("Bearer".to_string()),
    };
    GoogleClient::new(test_agent(), token).with_base_urls(base_url, base_url)
}

#[test]
fn insert_request_targets_document_start() {
    let body = serde_json::to_value(BatchUpdateRequest::insert_at_start("Hello")).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "requests": [
                { "insertText": { "location": { "index": 1 }, "text": "Hello" } }
            ]
        })
    );
}

#[test]
fn insert_text_posts_batch_update() {
    let (url, server) = serve_once(Canned::json("200 OK", r#"{"documentId":"doc-1"}"#));

    client_for(&url).insert_text("doc-1", "Checklist").unwrap();

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /v1/documents/doc-1:batchUpdate "));
    assert!(request.contains("Bearer ya29.test"));

    let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["requests"][0]["insertText"]["text"], "Checklist");
    assert_eq!(json["requests"][0]["insertText"]["location"]["index"], 1);
}

#[test]
fn insert_text_surfaces_api_errors() {
    let (url, server) = serve_once(Canned::json(
        "403 Forbidden",
        r#"{"error":{"status":"PERMISSION_DENIED"}}"#,
    ));

    let err = client_for(&url).insert_text("doc-1", "x").unwrap_err();
    match err {
        GoogleError::Status { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("PERMISSION_DENIED"));
        }
        other => panic!("unexpected error: {other}"),
    }
    server.join().unwrap();
}

#[test]
fn export_returns_pdf_bytes() {
    let (url, server) = serve_once(Canned {
        status: "200 OK",
        content_type: "application/pdf",
        body: b"%PDF-1.4 fake".to_vec(),
    });

    let bytes = client_for(&url).export_pdf("doc-1").unwrap();
    assert_eq!(bytes, b"%PDF-1.4 fake".to_vec());

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /drive/v3/files/doc-1/export?mimeType=application"));
}

#[test]
fn export_connection_failure_is_transport_error() {
    let err = client_for(&refused_url()).export_pdf("doc-1").unwrap_err();
    assert!(matches!(err, GoogleError::Transport(_)));
}

#[test]
fn document_url_points_at_editor() {
    assert_eq!(
        document_url("abc123"),
        "https://docs.google.com/document/d/abc123/edit"
    );
}
