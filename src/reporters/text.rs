//! Text (terminal) reporter
//!
//! Styling goes through `console`, which drops colors when stdout is not a
//! terminal, so piped output is plain text.

use crate::models::{Report, ResultSet, Severity, TokenStatus};
use anyhow::Result;
use console::style;

const RULE_WIDTH: usize = 60;
const BAR_WIDTH: usize = 30;

/// Severity marker
fn severity_tag(severity: Severity) -> String {
    match severity {
        Severity::Error => style("[X]").red().bold().to_string(),
        Severity::Warning => style("[!]").yellow().to_string(),
        Severity::Info => style("[i]").blue().to_string(),
    }
}

/// Render a full report: score, token budgets, recommendations, issues
pub fn render(report: &Report) -> Result<String> {
    let mut out = String::new();
    let band = report.band();

    out.push_str(&format!("\n{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str(&format!(
        "{}\n",
        style("Log File Genius - Validation Report").bold()
    ));
    out.push_str(&format!("{}\n\n", "=".repeat(RULE_WIDTH)));

    out.push_str(&format!(
        "Generated: {}\n",
        report.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "Health Score: {}/100 ({})\n\n",
        style(report.health_score).bold(),
        band.label()
    ));

    out.push_str(&format!("{}\n", style("TOKEN BUDGETS").bold()));
    for (name, status) in report.token_status.entries() {
        out.push_str(&format!(
            "  {:<10} {}  {}/{} ({:.1}%)\n",
            name.to_uppercase(),
            bar(status),
            status.current,
            status.target,
            status.percentage
        ));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", style("RECOMMENDATIONS").bold()));
    for rec in &report.recommendations {
        out.push_str(&format!("  - {}\n", rec));
    }

    out.push_str(&render_results(&report.validation_results)?);
    Ok(out)
}

/// Render the per-file issue listing with a trailing summary line
pub fn render_results(results: &ResultSet) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str("Log File Genius - Validation Results\n");
    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));

    for result in &results.results {
        out.push_str(&format!("\n{}:\n", style(&result.file).bold()));
        out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));

        if !result.has_issues() {
            out.push_str(&format!("{} No issues found\n", style("[OK]").green()));
            continue;
        }

        for issue in &result.issues {
            let line_info = issue
                .line
                .map(|l| format!(" (line {})", l))
                .unwrap_or_default();
            out.push_str(&format!(
                "{} {}{}\n",
                severity_tag(issue.severity),
                issue.message,
                line_info
            ));
            if let Some(suggestion) = &issue.suggestion {
                out.push_str(&format!("    -> {}\n", suggestion));
            }
        }
    }

    out.push_str(&format!("\n{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str(&format!(
        "Summary: {} errors, {} warnings\n",
        results.total_errors(),
        results.total_warnings()
    ));
    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));

    Ok(out)
}

/// ASCII fill bar proportional to the percentage, capped at full width
fn bar(status: &TokenStatus) -> String {
    let filled = ((status.percentage / 100.0) * BAR_WIDTH as f64) as usize;
    let filled = filled.min(BAR_WIDTH);
    let color = |s: String| {
        if status.percentage >= 90.0 {
            style(s).red().to_string()
        } else if status.percentage >= 80.0 {
            style(s).yellow().to_string()
        } else {
            style(s).green().to_string()
        }
    };
    format!(
        "[{}{}]",
        color("#".repeat(filled)),
        ".".repeat(BAR_WIDTH - filled)
    )
}
