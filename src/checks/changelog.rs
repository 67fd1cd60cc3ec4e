//! Change-record (CHANGELOG) rules
//!
//! Expected entry format:
//!
//! ```text
//! - Description. Files: `path/to/file`. Commit: `abc1234`
//! ```
//!
//! Any bullet line containing `Files:` is treated as an entry, even when it
//! sits in prose outside the entries section. That heuristic can over-flag.

use super::LogCheck;
use crate::models::{FileResult, Severity, TargetKind};
use regex::Regex;
use std::sync::OnceLock;

/// Minimum length of a non-pending commit hash
const MIN_COMMIT_HASH_LEN: usize = 7;

/// Placeholder hash for entries written before committing
const PENDING_COMMIT: &str = "pending";

fn unreleased_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^##\s+\[Unreleased\]").expect("valid regex"))
}

fn commit_hash() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Commit:\s*`([^`]+)`").expect("valid regex"))
}

fn period_before_files() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\s+Files:").expect("valid regex"))
}

pub struct ChangelogCheck;

impl LogCheck for ChangelogCheck {
    fn name(&self) -> &'static str {
        "changelog"
    }

    fn kind(&self) -> TargetKind {
        TargetKind::Changelog
    }

    fn check(&self, content: &str, result: &mut FileResult) {
        let mut has_unreleased = false;
        let mut has_keepachangelog_link = false;

        for (idx, line) in content.lines().enumerate() {
            let line_num = idx + 1;

            if unreleased_heading().is_match(line) {
                has_unreleased = true;
            }
            if line.contains("keepachangelog.com") {
                has_keepachangelog_link = true;
            }
            if is_entry_line(line) {
                check_entry(line, line_num, result);
            }
        }

        if !has_unreleased {
            result.add_issue(
                Severity::Error,
                None,
                "Missing ## [Unreleased] section",
                Some("Add '## [Unreleased]' section to track upcoming changes"),
            );
        }

        if !has_keepachangelog_link {
            result.add_issue(
                Severity::Warning,
                None,
                "Missing Keep a Changelog link",
                Some("Add link to https://keepachangelog.com/ in header"),
            );
        }
    }
}

fn is_entry_line(line: &str) -> bool {
    line.trim().starts_with("- ") && line.contains("Files:")
}

/// Validate one entry line. A missing `Files:` or `Commit:` section skips
/// the remaining checks for that line.
fn check_entry(line: &str, line_num: usize, result: &mut FileResult) {
    if !line.contains("Files:") {
        result.add_issue(
            Severity::Warning,
            Some(line_num),
            "Entry missing 'Files:' section",
            Some("Add 'Files: `path/to/file`' to entry"),
        );
        return;
    }

    if !line.contains("Commit:") {
        result.add_issue(
            Severity::Warning,
            Some(line_num),
            "Entry missing 'Commit:' section",
            Some("Add 'Commit: `hash`' to entry"),
        );
        return;
    }

    if let Some(hash) = commit_hash().captures(line).and_then(|c| c.get(1)) {
        let hash = hash.as_str();
        if hash == PENDING_COMMIT {
            result.add_issue(
                Severity::Info,
                Some(line_num),
                "Entry has pending commit",
                Some("Update with actual commit hash after committing"),
            );
        } else if hash.chars().count() < MIN_COMMIT_HASH_LEN {
            result.add_issue(
                Severity::Warning,
                Some(line_num),
                format!("Commit hash too short: {}", hash),
                Some("Use at least 7 characters for commit hash"),
            );
        }
    }

    if !period_before_files().is_match(line) {
        result.add_issue(
            Severity::Warning,
            Some(line_num),
            "Missing period before 'Files:'",
            Some("End description with period: 'Description. Files: ...'"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "# Changelog\n\nSee [Keep a Changelog](https://keepachangelog.com/en/1.1.0/).\n\n## [Unreleased]\n\n### Added\n";

    fn run(content: &str) -> FileResult {
        let mut result = FileResult::new("logs/CHANGELOG.md", TargetKind::Changelog);
        ChangelogCheck.check(content, &mut result);
        result
    }

    #[test]
    fn test_well_formed_changelog_is_clean() {
        let text = format!(
            "{HEADER}- Add parser. Files: `src/parser.rs`. Commit: `a1b2c3d`\n"
        );
        let result = run(&text);
        assert!(result.issues.is_empty(), "{:?}", result.issues);
    }

    #[test]
    fn test_missing_unreleased_is_error() {
        let result = run("# Changelog\nhttps://keepachangelog.com/\n## [1.0.0]\n");
        assert_eq!(result.errors, 1);
        assert_eq!(result.issues[0].message, "Missing ## [Unreleased] section");
        assert_eq!(result.issues[0].line, None);
    }

    #[test]
    fn test_unreleased_must_be_level_two_heading() {
        let result = run("# [Unreleased]\nkeepachangelog.com\n");
        assert_eq!(result.errors, 1);
    }

    #[test]
    fn test_missing_link_is_warning() {
        let result = run("## [Unreleased]\n");
        assert_eq!(result.errors, 0);
        assert_eq!(result.warnings, 1);
        assert_eq!(result.issues[0].message, "Missing Keep a Changelog link");
    }

    #[test]
    fn test_pending_commit_is_single_info() {
        let text = format!("{HEADER}- Add parser. Files: `src/parser.rs`. Commit: `pending`\n");
        let result = run(&text);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.passed, 1);
        assert_eq!(result.warnings, 0);
        assert_eq!(result.issues[0].severity, Severity::Info);
        assert_eq!(result.issues[0].line, Some(8));
    }

    #[test]
    fn test_short_hash_is_single_warning() {
        let text = format!("{HEADER}- Add parser. Files: `src/parser.rs`. Commit: `abc12`\n");
        let result = run(&text);
        assert_eq!(result.warnings, 1);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].message, "Commit hash too short: abc12");
    }

    #[test]
    fn test_missing_commit_skips_remaining_checks() {
        let text = format!("{HEADER}- Add parser Files: `src/parser.rs`\n");
        let result = run(&text);
        assert_eq!(result.warnings, 1);
        assert_eq!(result.issues[0].message, "Entry missing 'Commit:' section");
    }

    #[test]
    fn test_missing_period_fires_alongside_hash_warning() {
        let text = format!("{HEADER}- Add parser Files: `src/parser.rs`. Commit: `abc`\n");
        let result = run(&text);
        let messages: Vec<&str> = result.issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Commit hash too short: abc", "Missing period before 'Files:'"]
        );
    }

    #[test]
    fn test_non_bullet_lines_are_not_entries() {
        let text = format!("{HEADER}The Files: label lists touched paths\n");
        let result = run(&text);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_indented_bullets_are_entries() {
        let text = format!("{HEADER}  - Nested change Files: `a.rs`. Commit: `1234567`\n");
        let result = run(&text);
        assert_eq!(result.warnings, 1);
        assert_eq!(result.issues[0].message, "Missing period before 'Files:'");
    }

    #[test]
    fn test_entry_without_files_section() {
        let mut result = FileResult::new("CHANGELOG.md", TargetKind::Changelog);
        check_entry("- Something Commit: `abc`", 2, &mut result);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].message, "Entry missing 'Files:' section");
        assert_eq!(result.issues[0].line, Some(2));
    }
}
