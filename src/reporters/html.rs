//! HTML reporter
//!
//! Wraps the Markdown narrative in a minimal styled document. The body is the
//! Markdown text inside a `<pre>` block, escaped so it displays verbatim.

use super::markdown;
use crate::models::Report;
use anyhow::Result;

/// Render report as standalone HTML
pub fn render(report: &Report) -> Result<String> {
    let md = markdown::render(report)?;
    let band_class = report.band().as_str().replace(' ', "-");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Log File Genius - Validation Report</title>
    <style>
{CSS}
    </style>
</head>
<body class="{band_class}">
    <pre>{}</pre>
</body>
</html>"#,
        escape_html(&md)
    ))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const CSS: &str = r#"        body { font-family: Arial, sans-serif; max-width: 900px; margin: 40px auto; padding: 20px; }
        h1 { color: #2c3e50; }
        h2 { color: #34495e; border-bottom: 2px solid #3498db; padding-bottom: 10px; }
        .health-score { font-size: 48px; font-weight: bold; }
        .excellent { color: #27ae60; }
        .good { color: #f39c12; }
        .needs-attention { color: #e67e22; }
        .critical { color: #e74c3c; }
        pre { background: #f4f4f4; padding: 15px; border-radius: 5px; white-space: pre-wrap; }"#;
