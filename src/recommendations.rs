//! Action items derived from a validation run
//!
//! Rules are evaluated in a fixed priority order and every rule that applies
//! contributes one item. When nothing applies a single "all healthy" item is
//! returned.

use crate::models::{ResultSet, TokenStatusMap};

/// Percentage above which a budget counts as nearly full
const ARCHIVE_THRESHOLD: f64 = 80.0;

/// Warnings tolerated before recommending a cleanup pass
const WARNING_THRESHOLD: usize = 5;

pub fn generate(results: &ResultSet, tokens: &TokenStatusMap) -> Vec<String> {
    let mut recommendations = Vec::new();

    let total_errors = results.total_errors();
    if total_errors > 0 {
        recommendations.push(format!(
            "🔴 Fix {} validation error(s) immediately",
            total_errors
        ));
    }

    if tokens.combined.percentage > ARCHIVE_THRESHOLD {
        recommendations.push("📦 Archive old log entries - approaching token limit".to_string());
    }
    if tokens.changelog.percentage > ARCHIVE_THRESHOLD {
        recommendations.push("📝 Archive CHANGELOG entries older than 2 weeks".to_string());
    }
    if tokens.devlog.percentage > ARCHIVE_THRESHOLD {
        recommendations.push("📖 Archive DEVLOG entries older than 2 weeks".to_string());
    }

    let total_warnings = results.total_warnings();
    if total_warnings > WARNING_THRESHOLD {
        recommendations.push(format!(
            "⚠️ Address {} validation warnings",
            total_warnings
        ));
    }

    if results.issues().any(|i| i.message.contains("not found")) {
        recommendations.push("📁 Run installer to create missing log files".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("✅ All systems healthy - keep up the good work!".to_string());
    }

    recommendations
}
