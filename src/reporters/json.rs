//! JSON reporter
//!
//! Outputs the full Report as pretty-printed JSON, preserving result and
//! issue order. Useful for machine consumption or piping to jq.

use crate::models::{Report, ResultSet};
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render bare validation results as `{"results": [...]}`
pub fn render_results(results: &ResultSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
