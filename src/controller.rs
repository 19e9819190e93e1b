//! Audit controller - coordinates the session, the remote API, and export
//! artifact handling.
//!
//! State machine: Idle -> Loading -> {Ready, Error}; only a new `run_audit`
//! leaves Ready or Error. Overlapping calls are permitted and last-write-wins;
//! there is no cancellation token at this layer.

use std::path::PathBuf;

use chrono::Utc;

use crate::domain::models::AuditRequest;
use crate::error::{AppError, Result};
use crate::service::api::{ApiClient, ExportPayload};
use crate::service::export::{export_filename, save_artifact, ExportFormat};
use crate::session::{Session, Tab};

pub struct AuditController {
    api: ApiClient,
    session: Session,
    export_dir: PathBuf,
}

impl AuditController {
    pub fn new(api: ApiClient, export_dir: PathBuf) -> Self {
        Self {
            api,
            session: Session::new(),
            export_dir,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.session.select_tab(tab);
    }

    pub fn toggle_issue(&mut self, index: usize) {
        self.session.toggle_issue(index);
    }

    /// Run one audit and store the outcome on the session.
    ///
    /// An empty URL fails validation before any network call and leaves the
    /// stored result untouched. Otherwise the session enters Loading, and
    /// the loading flag plus progress text are cleared on every exit path,
    /// including transport failure.
    pub async fn run_audit(&mut self, request: AuditRequest) -> Result<()> {
        if request.url.trim().is_empty() {
            let message = "Please enter a URL";
            self.session.set_error(message);
            return Err(AppError::validation(message));
        }

        self.session.begin_audit();
        let outcome = self.api.run_audit(&request).await;
        self.session.finish_loading();

        match outcome {
            Ok(result) => {
                log::info!(
                    "Audit complete: {} pages analyzed",
                    result.analysis.summary.total_pages_analyzed
                );
                self.session.store_result(result);
                Ok(())
            }
            Err(err) => {
                self.session.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Export the stored result in the given format and save the artifact
    /// under the export directory.
    ///
    /// Without a stored result this is a no-op (`Ok(None)`). Failures are
    /// recorded as an export notice on the session - a channel separate from
    /// the audit error - and never disturb the stored result or phase.
    pub async fn export_report(&mut self, format: ExportFormat) -> Result<Option<PathBuf>> {
        let outcome = {
            let Some(result) = self.session.result() else {
                return Ok(None);
            };
            let payload = ExportPayload {
                analysis: &result.analysis,
                url: &result.url,
            };
            self.api.export(format, &payload).await
        };

        let saved = match outcome {
            Ok(bytes) => {
                let filename = export_filename(format, Utc::now());
                save_artifact(&self.export_dir, &filename, &bytes).await
            }
            Err(err) => Err(err),
        };

        match saved {
            Ok(path) => Ok(Some(path)),
            Err(err) => {
                self.session.set_export_notice(err.to_string());
                Err(err)
            }
        }
    }

    pub fn take_export_notice(&mut self) -> Option<String> {
        self.session.take_export_notice()
    }
}
