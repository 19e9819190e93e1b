//! Score band classification.
//!
//! One function decides the band for every score shown anywhere in the
//! report, so the label and the style class can never diverge.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreBand {
    /// Human-readable label, shown next to the numeric score.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs Improvement",
            ScoreBand::Poor => "Poor",
        }
    }

    /// Stable style token for renderers that color or tag scores.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::NeedsImprovement => "needs-improvement",
            ScoreBand::Poor => "poor",
        }
    }
}

/// Classify a score into its band. Input is not assumed pre-clamped;
/// anything below 40 is Poor, anything at or above 80 is Excellent.
pub fn classify(score: i64) -> ScoreBand {
    if score >= 80 {
        ScoreBand::Excellent
    } else if score >= 60 {
        ScoreBand::Good
    } else if score >= 40 {
        ScoreBand::NeedsImprovement
    } else {
        ScoreBand::Poor
    }
}
