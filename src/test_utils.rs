//! Shared fixtures for unit and integration tests.

pub mod fixtures {
    use crate::domain::models::{
        Advice, AdviceKind, Analysis, AuditResult, AverageScores, BrokenLink, CategoryDetails,
        CategoryScore, CommonIssue, Highlight, Issue, IssueTotals, Keyword, PageReport, Summary,
    };

    fn category(percentage: i64) -> CategoryScore {
        CategoryScore {
            percentage,
            details: CategoryDetails::default(),
        }
    }

    /// A visible page with no issues, for tests that inject their own.
    pub fn clean_page(url: &str) -> PageReport {
        PageReport {
            url: url.into(),
            overall_score: 90,
            technical_seo: category(90),
            content_seo: category(85),
            accessibility: category(88),
            issues: Vec::new(),
            warnings: Vec::new(),
            positive_highlights: Vec::new(),
            error: None,
        }
    }

    fn meta_description_warning() -> Issue {
        Issue {
            issue: "Missing Meta Description".into(),
            recommendation: "Add a compelling meta description (150-160 characters)".into(),
        }
    }

    /// A three-page audit result: two visible pages sharing a common issue
    /// and one errored page that must stay out of every aggregate.
    pub fn sample_result() -> AuditResult {
        let mut page_a = clean_page("https://example.com/a");
        page_a.issues.push(Issue {
            issue: "Missing H1 Tag".into(),
            recommendation: "Add one H1 tag with main keyword near the top".into(),
        });
        page_a.warnings.push(meta_description_warning());
        page_a.positive_highlights.push(Highlight {
            icon: "award".into(),
            category: "Overall".into(),
            highlight: "Excellent technical SEO!".into(),
            detail: "90% technical SEO score".into(),
        });
        page_a.content_seo.details = CategoryDetails {
            word_count: Some(800),
            word_count_status: Some("excellent".into()),
            flesch_reading_ease: Some(65.2),
            reading_level: Some("Standard".into()),
            tone: Some("Positive".into()),
            sentiment_polarity: Some(0.25),
            total_headings: Some(6),
            top_keywords: vec![Keyword {
                keyword: "seo".into(),
                count: 12,
                density: 2.4,
            }],
        };

        let mut page_b = clean_page("https://example.com/b");
        page_b.overall_score = 70;
        page_b.warnings.push(meta_description_warning());
        page_b.positive_highlights.push(Highlight {
            icon: "check-circle".into(),
            category: "Performance".into(),
            highlight: "Fast load time".into(),
            detail: "Page loads in under a second".into(),
        });
        page_b.content_seo.details.word_count = Some(150);
        page_b.content_seo.details.word_count_status = Some("low".into());

        let mut errored = clean_page("https://example.com/broken");
        errored.error = Some("Request timed out".into());
        // Carries the common issue too; exclusion from counts is the point
        errored.warnings.push(meta_description_warning());

        AuditResult {
            url: "https://example.com".into(),
            analysis: Analysis {
                summary: Summary {
                    average_scores: AverageScores {
                        overall: 80,
                        technical_seo: 85,
                        content_seo: 70,
                        accessibility: 75,
                    },
                    total_pages_crawled: 3,
                    total_pages_analyzed: 2,
                    total_broken_links: 1,
                    total_issues: IssueTotals {
                        critical: 1,
                        warnings: 2,
                    },
                    health_status: "good".into(),
                    common_issues: vec![
                        CommonIssue {
                            issue: "Missing Meta Description".into(),
                            count: 2,
                        },
                        CommonIssue {
                            issue: "Missing H1 Tag".into(),
                            count: 1,
                        },
                    ],
                },
                pages: vec![page_a, page_b, errored],
                broken_links: vec![BrokenLink {
                    url: "https://example.com/dead".into(),
                    status_code: Some(404),
                    found_on: "https://example.com/a".into(),
                }],
            },
            ai_advice: vec![
                Advice {
                    kind: AdviceKind::Critical,
                    category: "Overall SEO".into(),
                    message: "Your site needs urgent attention in several areas.".into(),
                },
                Advice {
                    kind: AdviceKind::Success,
                    category: "Content".into(),
                    message: "Content length looks healthy on the main page.".into(),
                },
            ],
        }
    }

    /// Visibility fixture: an errored entry first, then one healthy page.
    pub fn result_with_errored_page() -> AuditResult {
        let mut errored = clean_page("https://example.com/down");
        errored.error = Some("timeout".into());
        let page = clean_page("https://example.com/a");

        let mut result = sample_result();
        result.analysis.pages = vec![errored, page];
        result
    }
}
