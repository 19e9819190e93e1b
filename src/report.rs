//! Report view model.
//!
//! Pure query functions over a borrowed `AuditResult`. Every derivation is
//! computed fresh on each call from the stored payload; nothing here caches
//! or mutates, so the queries are idempotent and preserve input ordering.

use crate::domain::models::{
    Advice, AuditResult, BrokenLink, CategoryDetails, Highlight, Issue, PageReport, Summary,
};

pub struct ReportView<'a> {
    result: &'a AuditResult,
}

impl<'a> ReportView<'a> {
    pub fn new(result: &'a AuditResult) -> Self {
        Self { result }
    }

    pub fn summary(&self) -> &'a Summary {
        &self.result.analysis.summary
    }

    /// Pages that participate in aggregates: everything the crawler
    /// analyzed without error, in crawl order.
    pub fn visible_pages(&self) -> Vec<&'a PageReport> {
        self.result
            .analysis
            .pages
            .iter()
            .filter(|p| p.is_visible())
            .collect()
    }

    /// Visible pages whose issues or warnings contain `text` verbatim.
    /// This is the affected-page set behind each common-issue entry.
    pub fn pages_by_issue_text(&self, text: &str) -> Vec<&'a PageReport> {
        self.visible_pages()
            .into_iter()
            .filter(|p| p.has_issue_text(text))
            .collect()
    }

    /// All positive highlights across visible pages, flattened in page order.
    pub fn all_highlights(&self) -> Vec<&'a Highlight> {
        self.visible_pages()
            .into_iter()
            .flat_map(|p| p.positive_highlights.iter())
            .collect()
    }

    /// All critical issues across visible pages, flattened in page order.
    /// Warnings are page-scoped and stay out of this list.
    pub fn all_critical_issues(&self) -> Vec<&'a Issue> {
        self.visible_pages()
            .into_iter()
            .flat_map(|p| p.issues.iter())
            .collect()
    }

    /// Content-quality metrics for the FIRST visible page only. The view is
    /// deliberately scoped to a single page, not an aggregate; keep it that
    /// way unless the requirements change.
    pub fn content_metrics(&self) -> Option<&'a CategoryDetails> {
        self.visible_pages()
            .into_iter()
            .next()
            .map(|p| &p.content_seo.details)
    }

    pub fn broken_links(&self) -> &'a [BrokenLink] {
        &self.result.analysis.broken_links
    }

    pub fn advice(&self) -> &'a [Advice] {
        &self.result.ai_advice
    }
}
