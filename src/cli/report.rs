//! Report command - validate, score, and render a full report

use crate::config::load_config;
use crate::models::Report;
use crate::reporters::{self, OutputFormat};
use crate::validator::{Scope, Validator};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use std::str::FromStr;

/// Run the report command
pub fn run(
    root: &Path,
    config_path: Option<&Path>,
    format: &str,
    output_path: Option<&Path>,
) -> Result<i32> {
    let config = load_config(root, config_path);
    let results = Validator::new(root, &config).run(Scope::All)?;
    let report = Report::generate(results, &config.targets);

    let fmt = OutputFormat::from_str(format)?;
    let output = reporters::report_with_format(&report, fmt)?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Wrote {} report to {}", fmt, path.display());
            println!("Report saved to {}", style(path.display()).cyan());
        }
        None => println!("{}", output),
    }

    Ok(exit_code(report.health_score))
}

/// 2 below 50, 1 below 90, else 0
pub(crate) fn exit_code(health_score: u8) -> i32 {
    if health_score < 50 {
        2
    } else if health_score < 90 {
        1
    } else {
        0
    }
}
