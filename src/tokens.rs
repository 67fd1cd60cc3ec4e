//! Token estimation and budget thresholds
//!
//! Token counts are a rough approximation: one token per four characters of
//! input, rounded down. The budget step function classifies an estimate
//! against its target.

use crate::models::TokenUsage;

/// Characters per estimated token
pub const CHARS_PER_TOKEN: usize = 4;

/// Estimate the token count of `text`
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / CHARS_PER_TOKEN
}

/// Where an estimate falls relative to its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetLevel {
    /// Below 80% of the budget
    Within,
    /// From 80% up to and including 100% of the budget
    Approaching,
    /// Above the budget
    Exceeded,
}

impl BudgetLevel {
    pub fn classify(usage: TokenUsage) -> Self {
        if usage.current > usage.target {
            BudgetLevel::Exceeded
        } else if (usage.current as u128) * 5 >= (usage.target as u128) * 4 {
            BudgetLevel::Approaching
        } else {
            BudgetLevel::Within
        }
    }
}
