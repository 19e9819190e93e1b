//! End-to-end tests for the audit session against a mock service.
//!
//! These drive the full flow the binary uses: run an audit, inspect the
//! session, render views, and export an artifact.

use seoreport::controller::AuditController;
use seoreport::domain::models::AuditRequest;
use seoreport::render;
use seoreport::service::{ApiClient, ExportFormat};
use seoreport::session::{Phase, Tab};
use seoreport::test_utils::fixtures;

fn request(url: &str) -> AuditRequest {
    AuditRequest {
        url: url.into(),
        max_pages: 5,
        max_depth: 2,
    }
}

#[tokio::test]
async fn test_audit_then_render_then_export() {
    let mut server = mockito::Server::new_async().await;
    let body = serde_json::to_string(&fixtures::sample_result()).unwrap();

    let audit_mock = server
        .mock("POST", "/audit")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "url": "https://example.com",
            "max_pages": 5,
            "max_depth": 2
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let export_mock = server
        .mock("POST", "/export/json")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "url": "https://example.com"
        })))
        .with_status(200)
        .with_body(r#"{"report":true}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut controller = AuditController::new(ApiClient::new(server.url()), dir.path().to_path_buf());

    controller
        .run_audit(request("https://example.com"))
        .await
        .expect("audit should succeed");

    assert_eq!(controller.session().phase(), Phase::Ready);
    assert_eq!(controller.session().active_tab(), Tab::Overview);
    assert_eq!(controller.session().expanded_issue(), None);

    // Expand the top common issue and render the overview
    controller.toggle_issue(0);
    let text = render::render(controller.session());
    assert!(text.contains("Most Common Issues"));
    assert!(text.contains("Affected pages:"));
    assert!(text.contains("https://example.com/a"));

    // Export and verify the artifact landed with the expected name shape
    let path = controller
        .export_report(ExportFormat::Json)
        .await
        .expect("export should succeed")
        .expect("a result is stored, so the export is not a no-op");

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("seo_audit_"), "got {}", name);
    assert!(name.ends_with(".json"), "got {}", name);

    let written = std::fs::read(&path).unwrap();
    assert_eq!(written, br#"{"report":true}"#);

    audit_mock.assert_async().await;
    export_mock.assert_async().await;
}

#[tokio::test]
async fn test_superseded_audit_is_last_write_wins() {
    // Two sequential audits against different payloads; the session keeps
    // only whatever the latest response stored.
    let mut server = mockito::Server::new_async().await;

    let first = fixtures::sample_result();
    let mut second = fixtures::sample_result();
    second.url = "https://other.example".into();

    let _first_mock = server
        .mock("POST", "/audit")
        .with_status(200)
        .with_body(serde_json::to_string(&first).unwrap())
        .expect(1)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut controller = AuditController::new(ApiClient::new(server.url()), dir.path().to_path_buf());

    controller
        .run_audit(request("https://example.com"))
        .await
        .unwrap();

    server.reset_async().await;
    let _second_mock = server
        .mock("POST", "/audit")
        .with_status(200)
        .with_body(serde_json::to_string(&second).unwrap())
        .create_async()
        .await;

    controller
        .run_audit(request("https://other.example"))
        .await
        .unwrap();

    assert_eq!(
        controller.session().result().unwrap().url,
        "https://other.example"
    );
}

#[tokio::test]
async fn test_failed_audit_renders_error_view_and_recovers() {
    let mut server = mockito::Server::new_async().await;
    let _error_mock = server
        .mock("POST", "/audit")
        .with_status(400)
        .with_body(r#"{"error": "URL must start with http:// or https://"}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut controller = AuditController::new(ApiClient::new(server.url()), dir.path().to_path_buf());

    controller
        .run_audit(request("example.com"))
        .await
        .expect_err("service rejects the malformed URL");

    assert_eq!(controller.session().phase(), Phase::Error);
    let text = render::render(controller.session());
    assert!(text.contains("Analysis Failed"));
    assert!(text.contains("URL must start with http:// or https://"));

    // Retry is a fresh user action: a new audit leaves the error state
    server.reset_async().await;
    let _ok_mock = server
        .mock("POST", "/audit")
        .with_status(200)
        .with_body(serde_json::to_string(&fixtures::sample_result()).unwrap())
        .create_async()
        .await;

    controller
        .run_audit(request("https://example.com"))
        .await
        .unwrap();
    assert_eq!(controller.session().phase(), Phase::Ready);
    assert!(controller.session().error().is_none());
}
