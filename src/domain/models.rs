//! Wire models for the remote audit service.
//!
//! These mirror the audit endpoint's JSON exactly. An `AuditResult` is
//! opaque, read-only payload: it is stored wholesale on a successful audit
//! and never merged or partially updated. Fields the service may omit are
//! modeled as `Option` so a legitimate `0` is never mistaken for "absent".

use serde::{Deserialize, Serialize};

// ====== Request ======

/// One audit submission. Immutable once sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    pub url: String,
    pub max_pages: i64,
    pub max_depth: i64,
}

// ====== Result payload ======

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    pub url: String,
    pub analysis: Analysis,
    #[serde(default)]
    pub ai_advice: Vec<Advice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub summary: Summary,
    #[serde(default)]
    pub pages: Vec<PageReport>,
    #[serde(default)]
    pub broken_links: Vec<BrokenLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub average_scores: AverageScores,
    pub total_pages_crawled: i64,
    pub total_pages_analyzed: i64,
    pub total_broken_links: i64,
    pub total_issues: IssueTotals,
    pub health_status: String,
    #[serde(default)]
    pub common_issues: Vec<CommonIssue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageScores {
    pub overall: i64,
    pub technical_seo: i64,
    pub content_seo: i64,
    pub accessibility: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTotals {
    pub critical: i64,
    pub warnings: i64,
}

/// An issue text recurring across pages, with its occurrence count as
/// computed by the remote service. Affected-page sets are re-derived
/// locally by exact text match, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonIssue {
    pub issue: String,
    pub count: i64,
}

// ====== Per-page report ======

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    /// An errored page carries only `error` on the wire; everything else
    /// defaults so the entry still deserializes.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub overall_score: i64,
    #[serde(default)]
    pub technical_seo: CategoryScore,
    #[serde(default)]
    pub content_seo: CategoryScore,
    #[serde(default)]
    pub accessibility: CategoryScore,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub warnings: Vec<Issue>,
    #[serde(default)]
    pub positive_highlights: Vec<Highlight>,
    /// Set when the crawler could not analyze this page. Errored pages are
    /// excluded from every per-page aggregate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageReport {
    /// Whether this page participates in aggregates.
    pub fn is_visible(&self) -> bool {
        self.error.is_none()
    }

    /// Combined issue + warning count for the page metrics row.
    pub fn issue_count(&self) -> usize {
        self.issues.len() + self.warnings.len()
    }

    /// True when `text` appears verbatim as an issue or warning on this page.
    pub fn has_issue_text(&self, text: &str) -> bool {
        self.issues
            .iter()
            .chain(self.warnings.iter())
            .any(|i| i.issue == text)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryScore {
    pub percentage: i64,
    #[serde(default)]
    pub details: CategoryDetails,
}

/// Loosely-shaped category detail block. Only the content-quality view
/// reads these; every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flesch_reading_ease: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_polarity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_headings: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_keywords: Vec<Keyword>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    pub count: i64,
    pub density: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub issue: String,
    pub recommendation: String,
}

/// A page-scoped SEO strength surfaced to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub category: String,
    pub highlight: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokenLink {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    pub found_on: String,
}

// ====== AI advice ======

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advice {
    #[serde(rename = "type")]
    pub kind: AdviceKind,
    pub category: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceKind {
    Critical,
    Warning,
    Success,
    Info,
}

// Unknown kinds fall back to the info presentation.
impl<'de> Deserialize<'de> for AdviceKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let kind = String::deserialize(deserializer)?;
        Ok(match kind.as_str() {
            "critical" => AdviceKind::Critical,
            "warning" => AdviceKind::Warning,
            "success" => AdviceKind::Success,
            _ => AdviceKind::Info,
        })
    }
}

impl AdviceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceKind::Critical => "critical",
            AdviceKind::Warning => "warning",
            AdviceKind::Success => "success",
            AdviceKind::Info => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_issue_text_matches_issues_and_warnings() {
        let mut page = crate::test_utils::fixtures::clean_page("https://example.com");
        page.issues.push(Issue {
            issue: "Missing H1 Tag".into(),
            recommendation: "Add one H1 tag".into(),
        });
        page.warnings.push(Issue {
            issue: "Thin Content".into(),
            recommendation: "Add more content".into(),
        });

        assert!(page.has_issue_text("Missing H1 Tag"));
        assert!(page.has_issue_text("Thin Content"));
        assert!(!page.has_issue_text("Missing Title Tag"));
        assert_eq!(page.issue_count(), 2);
    }

    #[test]
    fn test_errored_page_is_not_visible() {
        let mut page = crate::test_utils::fixtures::clean_page("https://example.com");
        assert!(page.is_visible());
        page.error = Some("timeout".into());
        assert!(!page.is_visible());
    }

    #[test]
    fn test_errored_page_deserializes_from_error_only() {
        // The analyzer emits nothing but the error text for a failed page
        let page: PageReport = serde_json::from_str(r#"{"error":"Request timed out"}"#).unwrap();
        assert!(!page.is_visible());
        assert_eq!(page.error.as_deref(), Some("Request timed out"));
        assert_eq!(page.overall_score, 0);
        assert!(page.issues.is_empty());
    }

    #[test]
    fn test_advice_kind_unknown_falls_back_to_info() {
        let advice: Advice = serde_json::from_str(
            r#"{"type":"surprise","category":"Misc","message":"hello"}"#,
        )
        .unwrap();
        assert_eq!(advice.kind, AdviceKind::Info);

        let advice: Advice = serde_json::from_str(
            r#"{"type":"critical","category":"Overall","message":"fix it"}"#,
        )
        .unwrap();
        assert_eq!(advice.kind, AdviceKind::Critical);
    }

    #[test]
    fn test_category_details_zero_is_present_not_absent() {
        let details: CategoryDetails =
            serde_json::from_str(r#"{"word_count":0,"flesch_reading_ease":0.0}"#).unwrap();
        assert_eq!(details.word_count, Some(0));
        assert_eq!(details.flesch_reading_ease, Some(0.0));
        assert!(details.reading_level.is_none());
    }

    #[test]
    fn test_result_ignores_unknown_payload_fields() {
        // The audit endpoint also sends `timestamp` and `crawl_stats`;
        // this layer only consumes url/analysis/ai_advice.
        let json = serde_json::json!({
            "url": "https://example.com",
            "timestamp": "2024-01-02T03:04:05",
            "crawl_stats": {"pages_crawled": 1, "links_found": 3, "broken_links": 0},
            "analysis": {
                "summary": {
                    "average_scores": {
                        "overall": 75, "technical_seo": 80,
                        "content_seo": 70, "accessibility": 75
                    },
                    "total_pages_crawled": 1,
                    "total_pages_analyzed": 1,
                    "total_broken_links": 0,
                    "total_issues": {"critical": 0, "warnings": 1},
                    "health_status": "good",
                    "common_issues": []
                },
                "pages": [],
                "broken_links": []
            },
            "ai_advice": []
        });

        let result: AuditResult = serde_json::from_value(json).unwrap();
        assert_eq!(result.url, "https://example.com");
        assert_eq!(result.analysis.summary.average_scores.overall, 75);
    }
}
