//! Token-budget rules
//!
//! A file over budget is an error and a file at 80% or more is a warning.
//! The combined pseudo-target also records an info issue when it is within
//! budget.

use crate::models::{FileResult, Severity, TargetKind, TokenUsage};
use crate::tokens::BudgetLevel;

/// Apply the per-file budget rule. Nothing is recorded within budget.
pub fn check_file_budget(kind: TargetKind, usage: TokenUsage, result: &mut FileResult) {
    let label = kind.label();
    let level = BudgetLevel::classify(usage);
    tracing::debug!(
        "{} token estimate {}/{} classified as {:?}",
        label,
        usage.current,
        usage.target,
        level
    );

    match level {
        BudgetLevel::Exceeded => result.add_budget_issue(
            Severity::Error,
            usage,
            format!(
                "{} exceeds token target ({} > {})",
                label, usage.current, usage.target
            ),
            Some(format!("Archive old entries to logs/archive/{}-YYYY-MM.md", label).as_str()),
        ),
        BudgetLevel::Approaching => result.add_budget_issue(
            Severity::Warning,
            usage,
            format!(
                "{} approaching token target ({}/{})",
                label, usage.current, usage.target
            ),
            Some("Consider archiving entries older than 2 weeks"),
        ),
        BudgetLevel::Within => {}
    }
}

/// Build the combined pseudo-file result from the summed estimate
pub fn check_combined_budget(usage: TokenUsage) -> FileResult {
    let mut result = FileResult::new("Combined (CHANGELOG + DEVLOG)", TargetKind::Combined);

    match BudgetLevel::classify(usage) {
        BudgetLevel::Exceeded => result.add_budget_issue(
            Severity::Error,
            usage,
            format!(
                "Combined tokens exceed target ({} > {})",
                usage.current, usage.target
            ),
            Some("Archive old entries from both files"),
        ),
        BudgetLevel::Approaching => result.add_budget_issue(
            Severity::Warning,
            usage,
            format!(
                "Combined tokens approaching target ({}/{})",
                usage.current, usage.target
            ),
            Some("Plan to archive old entries soon"),
        ),
        BudgetLevel::Within => result.add_budget_issue(
            Severity::Info,
            usage,
            format!(
                "Combined tokens within target ({}/{})",
                usage.current, usage.target
            ),
            None,
        ),
    }

    result.tokens = Some(usage);
    result
}
