//! Session state for one audit run.
//!
//! All mutable UI state lives here: the stored result, loading/error
//! status, the active report tab, and the expanded common-issue index.
//! Transitions are synchronous; the only suspension points are the network
//! calls in the controller, which mutate the session before and after.

use std::fmt;
use std::str::FromStr;

use crate::domain::models::AuditResult;
use crate::report::ReportView;

/// Shown while an audit request is in flight. Original UI wording.
pub const LOADING_PROGRESS_TEXT: &str = "Crawling and analyzing your website...";

// ====== Tab router ======

/// The six report views. All are always reachable; selection needs no
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Positive,
    Technical,
    Content,
    Pages,
    Ai,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::Positive,
        Tab::Technical,
        Tab::Content,
        Tab::Pages,
        Tab::Ai,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Positive => "positive",
            Tab::Technical => "technical",
            Tab::Content => "content",
            Tab::Pages => "pages",
            Tab::Ai => "ai",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Positive => "What's Working Well",
            Tab::Technical => "Technical Issues",
            Tab::Content => "Content Analysis",
            Tab::Pages => "Page Details",
            Tab::Ai => "AI Insights",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(Tab::Overview),
            "positive" => Ok(Tab::Positive),
            "technical" => Ok(Tab::Technical),
            "content" => Ok(Tab::Content),
            "pages" => Ok(Tab::Pages),
            "ai" => Ok(Tab::Ai),
            other => Err(format!(
                "unknown view '{}' (expected one of: overview, positive, technical, content, pages, ai)",
                other
            )),
        }
    }
}

// ====== Session phase ======

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Error,
}

// ====== Session container ======

/// One logical session. Replaced state is dropped, never merged; a new
/// `run_audit` is the only way out of Ready or Error.
#[derive(Debug, Default)]
pub struct Session {
    result: Option<AuditResult>,
    error: Option<String>,
    export_notice: Option<String>,
    loading: bool,
    loading_progress: String,
    active_tab: Tab,
    expanded_issue: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived from the stored flags; an error wins over a lingering result
    /// so a failed validation is visible even mid-session.
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else if self.result.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn result(&self) -> Option<&AuditResult> {
        self.result.as_ref()
    }

    /// View-model handle over the stored result, if any.
    pub fn report(&self) -> Option<ReportView<'_>> {
        self.result.as_ref().map(ReportView::new)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn loading_progress(&self) -> &str {
        &self.loading_progress
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn expanded_issue(&self) -> Option<usize> {
        self.expanded_issue
    }

    // ====== Transitions ======

    /// Enter Loading: clear any prior result and error, set progress text.
    pub fn begin_audit(&mut self) {
        self.loading = true;
        self.error = None;
        self.result = None;
        self.loading_progress = LOADING_PROGRESS_TEXT.to_string();
    }

    /// Clear the loading flag and progress text. Runs on every exit path of
    /// an audit, success or failure.
    pub fn finish_loading(&mut self) {
        self.loading = false;
        self.loading_progress.clear();
    }

    /// Store a fresh result wholesale and reset the view state: active tab
    /// back to Overview, no issue expanded, error cleared.
    pub fn store_result(&mut self, result: AuditResult) {
        self.result = Some(result);
        self.error = None;
        self.active_tab = Tab::Overview;
        self.expanded_issue = None;
    }

    /// Record an audit failure. The result stays as `begin_audit` left it.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Single-selection expand/collapse over the common-issues list.
    /// Selecting the expanded index collapses it; selecting another index
    /// replaces the selection.
    pub fn toggle_issue(&mut self, index: usize) {
        self.expanded_issue = if self.expanded_issue == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    // ====== Export notices (independent of audit error state) ======

    pub fn set_export_notice(&mut self, message: impl Into<String>) {
        self.export_notice = Some(message.into());
    }

    pub fn take_export_notice(&mut self) -> Option<String> {
        self.export_notice.take()
    }
}
