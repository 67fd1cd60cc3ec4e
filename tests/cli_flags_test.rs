//! CLI flag contract tests
//!
//! Verifies exit codes and output modes of `validate`, `report`, and `init`
//! by running the built binary against temp directories.

use std::path::Path;
use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_logfile-genius")
}

fn setup_logs(changelog: &str, devlog: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("logs")).unwrap();
    std::fs::write(dir.path().join("logs/CHANGELOG.md"), changelog).unwrap();
    std::fs::write(dir.path().join("logs/DEVLOG.md"), devlog).unwrap();
    dir
}

fn healthy_logs() -> tempfile::TempDir {
    setup_logs(
        "# Changelog\n[Keep a Changelog](https://keepachangelog.com/)\n\n## [Unreleased]\n\n- Add parser. Files: `src/parser.rs`. Commit: `a1b2c3d`\n",
        "# DEVLOG\n\n## Current Context (Source of Truth)\n\n## Daily Log\n",
    )
}

fn run(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(bin())
        .args(args)
        .arg("--root")
        .arg(dir)
        .output()
        .expect("Failed to run logfile-genius");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (output.status.code().unwrap_or(-1), stdout, stderr)
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn validate_healthy_logs_exits_zero() {
    let dir = healthy_logs();
    let (code, stdout, _) = run(dir.path(), &["validate", "--strict"]);
    assert_eq!(code, 0, "stdout: {stdout}");
    assert!(stdout.contains("Log File Genius - Validation Results"));
    assert!(stdout.contains("Summary: 0 errors, 0 warnings"));
}

#[test]
fn validate_warnings_only_fail_in_strict_mode() {
    let dir = setup_logs("## [Unreleased]\n", "## Current Context\n## Daily Log\n");

    let (code, stdout, _) = run(dir.path(), &["validate"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("[!] Missing Keep a Changelog link"));

    let (code, _, _) = run(dir.path(), &["validate", "--strict"]);
    assert_eq!(code, 1);
}

#[test]
fn validate_errors_exit_two() {
    let dir = setup_logs("# Changelog\n", "## Daily Log\n");
    let (code, stdout, _) = run(dir.path(), &["validate"]);
    assert_eq!(code, 2);
    assert!(stdout.contains("[X] Missing ## [Unreleased] section"));
}

#[test]
fn validate_json_output() {
    let dir = setup_logs("## [Unreleased]\n", "## Current Context\n");
    let (_, stdout, _) = run(dir.path(), &["validate", "--json"]);
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let results = v["results"].as_array().expect("results array");

    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["file"], "logs/CHANGELOG.md");
    assert_eq!(results[0]["warnings"], 1);
    assert_eq!(results[1]["issues"][0]["severity"], "warning");
    assert_eq!(results[2]["issues"][0]["severity"], "info");
}

#[test]
fn validate_scope_flags() {
    let dir = setup_logs("# Changelog\n", "## Current Context\n## Daily Log\n");

    let (code, stdout, _) = run(dir.path(), &["validate", "--devlog", "--json"]);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(code, 0);
    assert_eq!(v["results"].as_array().unwrap().len(), 1);
    assert_eq!(v["results"][0]["file"], "logs/DEVLOG.md");

    let (code, _, _) = run(dir.path(), &["validate", "--changelog"]);
    assert_eq!(code, 2);
}

#[test]
fn validate_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(dir.path(), &["validate"]);
    assert_eq!(code, 2);
    assert!(stdout.contains("CHANGELOG not found at logs/CHANGELOG.md"));
    assert!(stdout.contains("-> Run the installer to create DEVLOG.md"));
}

#[test]
fn validate_malformed_config_uses_defaults() {
    let dir = healthy_logs();
    std::fs::write(dir.path().join(".logfile-config.yml"), "paths: [oops").unwrap();
    let (code, _, stderr) = run(dir.path(), &["validate", "--strict"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("Could not load config"), "stderr: {stderr}");
}

#[test]
fn validate_huge_budget_falls_back_to_defaults() {
    let dir = healthy_logs();
    std::fs::write(
        dir.path().join(".logfile-config.yml"),
        "token_targets:\n  changelog: 18446744073709551615\n",
    )
    .unwrap();
    let (code, stdout, stderr) = run(dir.path(), &["validate", "--strict", "--json"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stderr.contains("Could not load config"), "stderr: {stderr}");
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(v["results"][0]["tokens"]["target"], 10000);
}

#[test]
fn validate_config_flag_changes_paths() {
    let dir = healthy_logs();
    std::fs::write(
        dir.path().join("alt.yml"),
        "paths:\n  changelog: missing/CHANGELOG.md\n",
    )
    .unwrap();
    let (code, stdout, _) = run(dir.path(), &["validate", "--config", "alt.yml"]);
    assert_eq!(code, 2);
    assert!(stdout.contains("CHANGELOG not found at missing/CHANGELOG.md"));
}

// ============================================================================
// report
// ============================================================================

#[test]
fn report_markdown_to_stdout() {
    let dir = healthy_logs();
    let (code, stdout, _) = run(dir.path(), &["report"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("# Log File Genius - Validation Report"));
    assert!(stdout.contains("**Health Score:** 100/100"));
    assert!(stdout.contains("All systems healthy"));
}

#[test]
fn report_exit_code_follows_score() {
    // 2 warnings -> 90
    let dir = setup_logs("## [Unreleased]\n", "## Current Context\n");
    assert_eq!(run(dir.path(), &["report"]).0, 0);

    // 1 error + 2 warnings -> 70
    let dir = setup_logs("# Changelog\n", "## Current Context\n");
    assert_eq!(run(dir.path(), &["report"]).0, 1);

    // both files missing -> 60
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(run(dir.path(), &["report"]).0, 1);

    // 3 errors + 2 warnings -> 30
    let dir = setup_logs("# Changelog\n", "# DEVLOG\n");
    std::fs::write(
        dir.path().join(".logfile-config.yml"),
        "token_targets:\n  devlog: 1\n",
    )
    .unwrap();
    assert_eq!(run(dir.path(), &["report"]).0, 2);
}

#[test]
fn report_json_is_parseable() {
    let dir = healthy_logs();
    let (_, stdout, _) = run(dir.path(), &["report", "--format", "json"]);
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(v["health_score"], 100);
    assert!(v["timestamp"].is_string());
    assert_eq!(v["token_status"]["changelog"]["target"], 10000);
    assert_eq!(v["validation_results"]["results"].as_array().unwrap().len(), 3);
}

#[test]
fn report_html_written_to_file() {
    let dir = healthy_logs();
    let out = dir.path().join("report.html");
    let out_str = out.to_string_lossy().to_string();
    let (code, stdout, _) = run(dir.path(), &["report", "--format", "html", "-o", &out_str]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Report saved to"));
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<pre># Log File Genius - Validation Report"));
}

#[test]
fn report_unwritable_output_is_fatal() {
    let dir = healthy_logs();
    let out = dir.path().join("no-such-dir").join("report.md");
    let out_str = out.to_string_lossy().to_string();
    let (code, _, stderr) = run(dir.path(), &["report", "-o", &out_str]);

    assert_ne!(code, 0);
    assert!(stderr.contains("Failed to write report"), "stderr: {stderr}");
}

// ============================================================================
// init
// ============================================================================

#[test]
fn init_writes_config_that_validate_reads() {
    let dir = healthy_logs();
    let (code, stdout, _) = run(dir.path(), &["init"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Created"));
    assert!(dir.path().join(".logfile-config.yml").exists());

    let (code, _, stderr) = run(dir.path(), &["validate", "--strict"]);
    assert_eq!(code, 0);
    assert!(!stderr.contains("Could not load config"));
}
