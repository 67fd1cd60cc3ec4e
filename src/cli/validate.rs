//! Validate command - check log files and print the findings

use crate::config::load_config;
use crate::models::ResultSet;
use crate::reporters;
use crate::validator::{Scope, Validator};
use anyhow::Result;
use std::path::Path;

/// Run the validate command
pub fn run(
    root: &Path,
    config_path: Option<&Path>,
    scope: Scope,
    strict: bool,
    json: bool,
) -> Result<i32> {
    let config = load_config(root, config_path);
    let results = Validator::new(root, &config).run(scope)?;

    let output = if json {
        reporters::render_results_json(&results)?
    } else {
        reporters::render_results_text(&results)?
    };
    println!("{}", output);

    Ok(exit_code(&results, strict))
}

/// 2 on errors, 1 on warnings in strict mode, else 0
pub(crate) fn exit_code(results: &ResultSet, strict: bool) -> i32 {
    if results.total_errors() > 0 {
        2
    } else if strict && results.total_warnings() > 0 {
        1
    } else {
        0
    }
}
