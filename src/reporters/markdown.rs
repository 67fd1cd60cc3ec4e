//! Markdown reporter
//!
//! Generates the narrative report: header with score and band, token budget
//! progress bars, recommendations, and per-file validation details. The HTML
//! reporter wraps this exact text.

use crate::models::{Issue, Report, Severity, TokenStatus};
use anyhow::Result;

/// Progress bar width in cells
const BAR_WIDTH: usize = 30;

/// Render report as Markdown
pub fn render(report: &Report) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();

    // Header
    let band = report.band();
    lines.push("# Log File Genius - Validation Report".to_string());
    lines.push(format!(
        "\n**Generated:** {}",
        report.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!("\n**Health Score:** {}/100", report.health_score));
    lines.push(format!("{} {}", band.emoji(), band.label()));

    // Token budgets
    lines.push("\n## Token Budget Status\n".to_string());
    for (name, status) in report.token_status.entries() {
        lines.push(format!(
            "**{}:** {} / {} tokens ({:.1}%)",
            name.to_uppercase(),
            thousands(status.current),
            thousands(status.target),
            status.percentage
        ));
        lines.push(format!("{}\n", progress_bar(status)));
    }

    // Recommendations
    lines.push("\n## Recommendations\n".to_string());
    for rec in &report.recommendations {
        lines.push(format!("- {}", rec));
    }

    // Details
    lines.push("\n## Validation Details\n".to_string());
    for result in &report.validation_results.results {
        lines.push(format!("\n### {}\n", result.file));
        if !result.has_issues() {
            lines.push("✅ No issues\n".to_string());
            continue;
        }
        for issue in &result.issues {
            lines.extend(render_issue(issue));
        }
    }

    Ok(lines.join("\n"))
}

fn render_issue(issue: &Issue) -> Vec<String> {
    let line_info = issue
        .line
        .map(|l| format!(" (line {})", l))
        .unwrap_or_default();
    let mut out = vec![format!(
        "{} {}{}",
        severity_icon(issue.severity),
        issue.message,
        line_info
    )];
    if let Some(suggestion) = &issue.suggestion {
        out.push(format!("   → {}", suggestion));
    }
    out.push(String::new());
    out
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌",
        Severity::Warning => "⚠️",
        Severity::Info => "ℹ️",
    }
}

/// Colored fill bar; the fill is capped at the full width
fn progress_bar(status: &TokenStatus) -> String {
    let filled = ((status.percentage / 100.0) * BAR_WIDTH as f64) as usize;
    let filled = filled.min(BAR_WIDTH);
    let empty = BAR_WIDTH - filled;

    let color = if status.percentage >= 90.0 {
        "🔴"
    } else if status.percentage >= 80.0 {
        "🟠"
    } else if status.percentage >= 60.0 {
        "🟡"
    } else {
        "🟢"
    };

    format!("{} [{}{}]", color, "█".repeat(filled), "░".repeat(empty))
}

/// Format an integer with comma thousands separators
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
