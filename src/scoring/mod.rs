//! Health Scoring
//!
//! Reduces a validation run to a single 0-100 score.
//!
//! # Scoring Formula
//!
//! ```text
//! Score = clamp(100 - 20 × errors - 5 × warnings, 0, 100)
//! ```
//!
//! Info issues never cost points.
//!
//! # Bands
//!
//! - **Excellent**: 90 and above
//! - **Good**: 70 to 89
//! - **Needs attention**: 50 to 69
//! - **Critical**: below 50

use crate::models::ResultSet;

/// Points deducted per error
pub const ERROR_PENALTY: i64 = 20;
/// Points deducted per warning
pub const WARNING_PENALTY: i64 = 5;

/// Calculate the health score of a result set
pub fn health_score(results: &ResultSet) -> u8 {
    score_from_counts(results.total_errors(), results.total_warnings())
}

/// Apply the penalty formula to raw counts
pub fn score_from_counts(errors: usize, warnings: usize) -> u8 {
    let count = |n: usize| i64::try_from(n).unwrap_or(i64::MAX);
    let penalty = count(errors)
        .saturating_mul(ERROR_PENALTY)
        .saturating_add(count(warnings).saturating_mul(WARNING_PENALTY));
    100i64.saturating_sub(penalty).clamp(0, 100) as u8
}

/// Qualitative band for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Excellent,
    Good,
    NeedsAttention,
    Critical,
}

impl HealthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 90 => HealthBand::Excellent,
            s if s >= 70 => HealthBand::Good,
            s if s >= 50 => HealthBand::NeedsAttention,
            _ => HealthBand::Critical,
        }
    }

    /// Lower-case name ("excellent", "good", "needs attention", "critical")
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthBand::Excellent => "excellent",
            HealthBand::Good => "good",
            HealthBand::NeedsAttention => "needs attention",
            HealthBand::Critical => "critical",
        }
    }

    /// Display label with capitalisation
    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Excellent => "Excellent",
            HealthBand::Good => "Good",
            HealthBand::NeedsAttention => "Needs Attention",
            HealthBand::Critical => "Critical",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            HealthBand::Excellent => "🟢",
            HealthBand::Good => "🟡",
            HealthBand::NeedsAttention => "🟠",
            HealthBand::Critical => "🔴",
        }
    }
}

impl std::fmt::Display for HealthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
