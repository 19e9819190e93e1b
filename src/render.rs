//! Plain-text rendering of the report views.
//!
//! Renderers take the session (or the stored result plus view state) and
//! produce strings, so every view is testable without a terminal. Score
//! presentation always goes through `classify` - the label shown here can
//! never disagree with the band used elsewhere.

use std::fmt::Write;

use crate::domain::models::{AdviceKind, AuditResult};
use crate::domain::score::classify;
use crate::report::ReportView;
use crate::session::{Session, Tab};

/// Render the whole session: placeholder, progress, error view, or the
/// active report tab. The checks follow the same precedence as
/// `Session::phase`.
pub fn render(session: &Session) -> String {
    if session.is_loading() {
        return format!("{}\n", session.loading_progress());
    }
    if let Some(message) = session.error() {
        return format!("Analysis Failed\n{}\n", message);
    }
    if let Some(result) = session.result() {
        return render_tab(result, session.active_tab(), session.expanded_issue());
    }
    "Ready to Analyze\nEnter a website URL to start your SEO audit\n".to_string()
}

/// Render one report view over a stored result.
pub fn render_tab(result: &AuditResult, tab: Tab, expanded_issue: Option<usize>) -> String {
    let view = ReportView::new(result);
    let mut out = String::new();

    let overall = view.summary().average_scores.overall;
    let _ = writeln!(
        out,
        "=== SEO Audit: {} - {} ({}) ===",
        result.url,
        overall,
        classify(overall).label()
    );
    let _ = writeln!(out, "--- {} ---", tab.title());

    match tab {
        Tab::Overview => render_overview(&view, expanded_issue, &mut out),
        Tab::Positive => render_positive(&view, &mut out),
        Tab::Technical => render_technical(&view, &mut out),
        Tab::Content => render_content(&view, &mut out),
        Tab::Pages => render_pages(&view, &mut out),
        Tab::Ai => render_ai(&view, &mut out),
    }

    out
}

fn score_line(label: &str, score: i64) -> String {
    format!("{}: {}% ({})", label, score, classify(score).label())
}

fn render_overview(view: &ReportView<'_>, expanded_issue: Option<usize>, out: &mut String) {
    let summary = view.summary();
    let scores = &summary.average_scores;

    let _ = writeln!(out, "{}", score_line("Technical SEO", scores.technical_seo));
    let _ = writeln!(out, "{}", score_line("Content SEO", scores.content_seo));
    let _ = writeln!(out, "{}", score_line("Accessibility", scores.accessibility));
    let _ = writeln!(out);
    let _ = writeln!(out, "Pages crawled:   {}", summary.total_pages_crawled);
    let _ = writeln!(out, "Pages analyzed:  {}", summary.total_pages_analyzed);
    let _ = writeln!(out, "Broken links:    {}", summary.total_broken_links);
    let _ = writeln!(out, "Critical issues: {}", summary.total_issues.critical);
    let _ = writeln!(out, "Warnings:        {}", summary.total_issues.warnings);
    let _ = writeln!(
        out,
        "Health status:   {}",
        summary.health_status.replace('_', " ")
    );

    let pages = view.visible_pages();
    let _ = writeln!(out, "\nAll Crawled Pages ({})", pages.len());
    for page in &pages {
        let _ = writeln!(
            out,
            "  {} [{}%] technical {}% | content {}% | accessibility {}% | issues {}",
            page.url,
            page.overall_score,
            page.technical_seo.percentage,
            page.content_seo.percentage,
            page.accessibility.percentage,
            page.issue_count()
        );
    }

    if !summary.common_issues.is_empty() {
        let _ = writeln!(out, "\nMost Common Issues");
        for (index, common) in summary.common_issues.iter().enumerate() {
            let marker = if expanded_issue == Some(index) { "v" } else { ">" };
            let plural = if common.count == 1 { "page" } else { "pages" };
            let _ = writeln!(
                out,
                "  {} {} (found on {} {})",
                marker, common.issue, common.count, plural
            );

            if expanded_issue == Some(index) {
                // Summary counts can drift from verbatim page text; show the
                // panel only when at least one page actually matches.
                let affected = view.pages_by_issue_text(&common.issue);
                if !affected.is_empty() {
                    let _ = writeln!(out, "      Affected pages:");
                    for page in affected {
                        let _ = writeln!(out, "        - {}", page.url);
                    }
                }
            }
        }
    }
}

fn render_positive(view: &ReportView<'_>, out: &mut String) {
    let highlights = view.all_highlights();
    if highlights.is_empty() {
        let _ = writeln!(
            out,
            "Keep improving! As you optimize your website, positive highlights will appear here."
        );
        return;
    }

    for item in &highlights {
        let _ = writeln!(out, "  + {} [{}] {}", item.highlight, item.category, item.detail);
    }
    let _ = writeln!(
        out,
        "\n{} positive SEO aspect{} found. Keep up the excellent work!",
        highlights.len(),
        if highlights.len() == 1 { "" } else { "s" }
    );
}

fn render_technical(view: &ReportView<'_>, out: &mut String) {
    let issues = view.all_critical_issues();
    let broken = view.broken_links();

    if issues.is_empty() && broken.is_empty() {
        let _ = writeln!(out, "No critical technical SEO issues found.");
        return;
    }

    if !issues.is_empty() {
        let _ = writeln!(out, "Critical Technical Issues ({})", issues.len());
        for issue in &issues {
            let _ = writeln!(out, "  ! {}", issue.issue);
            let _ = writeln!(out, "    Recommendation: {}", issue.recommendation);
        }
    }

    if !broken.is_empty() {
        let _ = writeln!(out, "Broken Links ({})", broken.len());
        // Same cap as the original report: first ten only
        for link in broken.iter().take(10) {
            let status = link
                .status_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "error".to_string());
            let _ = writeln!(out, "  {} (status {}) found on {}", link.url, status, link.found_on);
        }
    }
}

fn render_content(view: &ReportView<'_>, out: &mut String) {
    let Some(details) = view.content_metrics() else {
        let _ = writeln!(out, "No content data available");
        return;
    };

    let fmt_opt_i64 = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_else(|| "N/A".into());
    let fmt_opt_f64 = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_else(|| "N/A".into());

    let _ = writeln!(out, "Word count:     {}", fmt_opt_i64(details.word_count));
    if let Some(status) = &details.word_count_status {
        let _ = writeln!(out, "                ({})", status.replace('_', " "));
    }
    let _ = writeln!(
        out,
        "Readability:    {} ({})",
        fmt_opt_f64(details.flesch_reading_ease),
        details.reading_level.as_deref().unwrap_or("N/A")
    );
    let _ = writeln!(
        out,
        "Tone:           {} (sentiment {})",
        details.tone.as_deref().unwrap_or("N/A"),
        fmt_opt_f64(details.sentiment_polarity)
    );
    let _ = writeln!(out, "Total headings: {}", fmt_opt_i64(details.total_headings));

    if !details.top_keywords.is_empty() {
        let _ = writeln!(out, "\nTop Keywords");
        for kw in &details.top_keywords {
            let _ = writeln!(out, "  {} ({}x, {}%)", kw.keyword, kw.count, kw.density);
        }
    }
}

fn render_pages(view: &ReportView<'_>, out: &mut String) {
    for page in view.visible_pages() {
        let _ = writeln!(
            out,
            "{}\n  {}",
            page.url,
            score_line("Overall", page.overall_score)
        );
        let _ = writeln!(
            out,
            "  technical {}% | content {}% | accessibility {}%",
            page.technical_seo.percentage,
            page.content_seo.percentage,
            page.accessibility.percentage
        );

        for issue in &page.issues {
            let _ = writeln!(out, "  [critical] {}: {}", issue.issue, issue.recommendation);
        }
        for warning in &page.warnings {
            let _ = writeln!(out, "  [warning] {}: {}", warning.issue, warning.recommendation);
        }
    }
}

fn render_ai(view: &ReportView<'_>, out: &mut String) {
    let advice = view.advice();
    if advice.is_empty() {
        let _ = writeln!(out, "No AI recommendations available");
        return;
    }

    for item in advice {
        let tag = match item.kind {
            AdviceKind::Critical => "critical",
            AdviceKind::Warning => "warning",
            AdviceKind::Success => "success",
            AdviceKind::Info => "info",
        };
        let _ = writeln!(out, "  [{}] {}: {}", tag, item.category, item.message);
    }
}
