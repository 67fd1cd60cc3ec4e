//! Core data models for Log File Genius
//!
//! These models flow through the whole pipeline: the rule checks produce
//! [`Issue`]s inside [`FileResult`]s, the validator collects them into a
//! [`ResultSet`], and the report builder folds everything into a [`Report`].

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::config::TokenTargets;
use crate::recommendations;
use crate::scoring;

/// Severity levels for issues
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Which validation target a [`FileResult`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// The change record (CHANGELOG.md)
    Changelog,
    /// The development journal (DEVLOG.md)
    Devlog,
    /// Pseudo-target for the summed token budget
    Combined,
}

impl TargetKind {
    /// Upper-case label used in issue messages
    pub fn label(&self) -> &'static str {
        match self {
            TargetKind::Changelog => "CHANGELOG",
            TargetKind::Devlog => "DEVLOG",
            TargetKind::Combined => "Combined",
        }
    }
}

/// Estimated token count measured against a budget.
///
/// Carried on budget issues and on each file result so that token status is
/// read from numbers, never parsed back out of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub current: usize,
    pub target: usize,
}

impl TokenUsage {
    pub fn new(current: usize, target: usize) -> Self {
        Self { current, target }
    }

    /// Percentage of the target used, rounded to one decimal
    pub fn percentage(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        let raw = self.current as f64 / self.target as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }
}

/// A single finding raised by a rule check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub file: String,
    /// 1-based line number, absent for whole-document findings
    #[serde(default)]
    pub line: Option<usize>,
    pub message: String,
    #[serde(default)]
    pub suggestion: Option<String>,
    /// Raw numbers behind a token-budget finding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<TokenUsage>,
}

/// Validation outcome for one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    pub file: String,
    pub kind: TargetKind,
    /// Count of info-level issues
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
    pub issues: Vec<Issue>,
    /// Token estimate for the target; `None` when the file was never read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenUsage>,
}

impl FileResult {
    pub fn new(file: impl Into<String>, kind: TargetKind) -> Self {
        Self {
            file: file.into(),
            kind,
            passed: 0,
            warnings: 0,
            errors: 0,
            issues: Vec::new(),
            tokens: None,
        }
    }

    /// Record an issue and bump the matching counter
    pub fn add_issue(
        &mut self,
        severity: Severity,
        line: Option<usize>,
        message: impl Into<String>,
        suggestion: Option<&str>,
    ) {
        self.push(Issue {
            severity,
            file: self.file.clone(),
            line,
            message: message.into(),
            suggestion: suggestion.map(str::to_string),
            budget: None,
        });
    }

    /// Record a token-budget issue carrying its numbers
    pub fn add_budget_issue(
        &mut self,
        severity: Severity,
        usage: TokenUsage,
        message: impl Into<String>,
        suggestion: Option<&str>,
    ) {
        self.push(Issue {
            severity,
            file: self.file.clone(),
            line: None,
            message: message.into(),
            suggestion: suggestion.map(str::to_string),
            budget: Some(usage),
        });
    }

    fn push(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => self.passed += 1,
        }
        self.issues.push(issue);
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Ordered results of one validation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub results: Vec<FileResult>,
}

impl ResultSet {
    pub fn total_errors(&self) -> usize {
        self.results.iter().map(|r| r.errors).sum()
    }

    pub fn total_warnings(&self) -> usize {
        self.results.iter().map(|r| r.warnings).sum()
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.results.iter().flat_map(|r| r.issues.iter())
    }

    pub fn get(&self, kind: TargetKind) -> Option<&FileResult> {
        self.results.iter().find(|r| r.kind == kind)
    }
}

/// Token budget status for one target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenStatus {
    pub current: usize,
    pub target: usize,
    pub percentage: f64,
}

impl From<TokenUsage> for TokenStatus {
    fn from(usage: TokenUsage) -> Self {
        Self {
            current: usage.current,
            target: usage.target,
            percentage: usage.percentage(),
        }
    }
}

/// Token status for every budgeted target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenStatusMap {
    pub changelog: TokenStatus,
    pub devlog: TokenStatus,
    pub combined: TokenStatus,
}

impl TokenStatusMap {
    /// Read token status off the results, falling back to an empty count
    /// against the configured target when a target was not measured.
    pub fn from_results(results: &ResultSet, targets: &TokenTargets) -> Self {
        let status = |kind: TargetKind, target: usize| -> TokenStatus {
            results
                .get(kind)
                .and_then(|r| r.tokens)
                .unwrap_or_else(|| TokenUsage::new(0, target))
                .into()
        };
        Self {
            changelog: status(TargetKind::Changelog, targets.changelog),
            devlog: status(TargetKind::Devlog, targets.devlog),
            combined: status(TargetKind::Combined, targets.combined),
        }
    }

    /// Entries in display order
    pub fn entries(&self) -> [(&'static str, &TokenStatus); 3] {
        [
            ("changelog", &self.changelog),
            ("devlog", &self.devlog),
            ("combined", &self.combined),
        ]
    }
}

/// Complete assessment of one validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: DateTime<Local>,
    pub health_score: u8,
    pub token_status: TokenStatusMap,
    pub validation_results: ResultSet,
    pub recommendations: Vec<String>,
}

impl Report {
    /// Build a report stamped with the current local time
    pub fn generate(results: ResultSet, targets: &TokenTargets) -> Self {
        Self::generate_at(results, targets, Local::now())
    }

    pub fn generate_at(
        results: ResultSet,
        targets: &TokenTargets,
        timestamp: DateTime<Local>,
    ) -> Self {
        let health_score = scoring::health_score(&results);
        let token_status = TokenStatusMap::from_results(&results, targets);
        let recommendations = recommendations::generate(&results, &token_status);
        Self {
            timestamp,
            health_score,
            token_status,
            validation_results: results,
            recommendations,
        }
    }

    pub fn band(&self) -> scoring::HealthBand {
        scoring::HealthBand::from_score(self.health_score)
    }
}
