//! HTTP client for the two remote audit-service operations.
//!
//! The service is reachable through exactly two calls: POST `/audit` and
//! POST `/export/{format}`. Request and response shapes are the whole
//! contract; everything else about the transport is out of scope.

use serde::{Deserialize, Serialize};

use crate::domain::models::{Analysis, AuditRequest, AuditResult};
use crate::error::{AppError, Result};
use crate::service::export::ExportFormat;

/// Failure responses may carry `{"error": "..."}`; the message is optional.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Export request body: the stored analysis plus the audited URL.
#[derive(Debug, Serialize)]
pub struct ExportPayload<'a> {
    pub analysis: &'a Analysis,
    pub url: &'a str,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// No request timeout is configured: a hung audit call leaves the
    /// session Loading indefinitely, an accepted limitation of this layer.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run one audit. A non-success response surfaces the server-supplied
    /// message when the body carries one, otherwise a status-derived
    /// fallback, matching what the error view shows.
    pub async fn run_audit(&self, request: &AuditRequest) -> Result<AuditResult> {
        log::info!("Requesting audit for: {}", request.url);

        let response = self
            .http
            .post(format!("{}/audit", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::audit(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("Error: {}", status.as_u16()));
            log::warn!("Audit request failed ({}): {}", status, message);
            return Err(AppError::audit(message));
        }

        response
            .json::<AuditResult>()
            .await
            .map_err(|e| AppError::audit(e.to_string()))
    }

    /// Request an export artifact. Failure bodies carry nothing useful, so
    /// any non-success collapses to a generic export error.
    pub async fn export(
        &self,
        format: ExportFormat,
        payload: &ExportPayload<'_>,
    ) -> Result<Vec<u8>> {
        log::info!("Requesting {} export for: {}", format.as_str(), payload.url);

        let response = self
            .http
            .post(format!("{}/export/{}", self.base_url, format.as_str()))
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::export(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::export("Export failed"));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::export(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    fn request() -> AuditRequest {
        AuditRequest {
            url: "https://example.com".into(),
            max_pages: 5,
            max_depth: 2,
        }
    }

    #[tokio::test]
    async fn test_run_audit_success() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::to_string(&fixtures::sample_result()).unwrap();
        let mock = server
            .mock("POST", "/audit")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let result = client.run_audit(&request()).await.unwrap();

        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.analysis.pages.len(), 3);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_run_audit_error_uses_server_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/audit")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "URL must start with http:// or https://"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.run_audit(&request()).await.unwrap_err();

        assert!(matches!(err, AppError::Audit(_)));
        assert_eq!(err.to_string(), "URL must start with http:// or https://");
    }

    #[tokio::test]
    async fn test_run_audit_error_falls_back_to_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/audit")
            .with_status(500)
            .with_body("")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let err = client.run_audit(&request()).await.unwrap_err();

        assert_eq!(err.to_string(), "Error: 500");
    }

    #[tokio::test]
    async fn test_export_returns_artifact_bytes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/export/pdf")
            .with_status(200)
            .with_header("content-type", "application/pdf")
            .with_body(&b"%PDF-1.4 fake"[..])
            .create_async()
            .await;

        let result = fixtures::sample_result();
        let payload = ExportPayload {
            analysis: &result.analysis,
            url: &result.url,
        };

        let client = ApiClient::new(server.url());
        let bytes = client.export(ExportFormat::Pdf, &payload).await.unwrap();

        assert_eq!(bytes, b"%PDF-1.4 fake");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_export_failure_is_generic() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/export/csv")
            .with_status(500)
            .create_async()
            .await;

        let result = fixtures::sample_result();
        let payload = ExportPayload {
            analysis: &result.analysis,
            url: &result.url,
        };

        let client = ApiClient::new(server.url());
        let err = client.export(ExportFormat::Csv, &payload).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to export: Export failed");
    }
}
