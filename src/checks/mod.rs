//! Rule checks for log files
//!
//! Each log role has one [`LogCheck`] implementation holding its structural
//! and content rules. The token-budget rule is shared and runs after the
//! role-specific rules, so budget findings always come last in a file's
//! issue list.
//!
//! - [`ChangelogCheck`] - `[Unreleased]` heading, Keep a Changelog link, entry lines
//! - [`DevlogCheck`] - current-context and daily-log sections
//! - [`budget`] - per-file and combined token budgets

pub mod budget;
mod changelog;
mod devlog;

pub use changelog::ChangelogCheck;
pub use devlog::DevlogCheck;

use crate::models::{FileResult, TargetKind, TokenUsage};
use crate::tokens::estimate_tokens;

/// A fixed set of rules applied to the text of one log file
pub trait LogCheck {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// The target this check validates
    fn kind(&self) -> TargetKind;

    /// Apply every rule to `content`, recording issues on `result`
    fn check(&self, content: &str, result: &mut FileResult);
}

/// Look up the rule set for a file target
pub fn check_for(kind: TargetKind) -> Option<Box<dyn LogCheck>> {
    match kind {
        TargetKind::Changelog => Some(Box::new(ChangelogCheck)),
        TargetKind::Devlog => Some(Box::new(DevlogCheck)),
        TargetKind::Combined => None,
    }
}

/// Run the rule set and the token-budget rule over one file's text.
///
/// `file` is the identifier stamped on every issue. The returned result
/// carries the token estimate used for the budget rule.
pub fn check_file(kind: TargetKind, file: &str, content: &str, budget: usize) -> FileResult {
    let mut result = FileResult::new(file, kind);

    if let Some(check) = check_for(kind) {
        tracing::debug!("Running {} rules on {}", check.name(), file);
        check.check(content, &mut result);
    }

    let usage = TokenUsage::new(estimate_tokens(content), budget);
    budget::check_file_budget(kind, usage, &mut result);
    result.tokens = Some(usage);

    result
}
