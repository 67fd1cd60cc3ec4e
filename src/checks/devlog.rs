//! Development journal (DEVLOG) rules

use super::LogCheck;
use crate::models::{FileResult, Severity, TargetKind};

const CONTEXT_MARKERS: &[&str] = &["Current Context", "Source of Truth"];
const LOG_MARKERS: &[&str] = &["Daily Log", "Development Log"];

pub struct DevlogCheck;

impl LogCheck for DevlogCheck {
    fn name(&self) -> &'static str {
        "devlog"
    }

    fn kind(&self) -> TargetKind {
        TargetKind::Devlog
    }

    fn check(&self, content: &str, result: &mut FileResult) {
        let headings: Vec<&str> = content
            .lines()
            .filter(|line| line.trim_start().starts_with('#'))
            .collect();
        let has_heading = |markers: &[&str]| {
            headings
                .iter()
                .any(|h| markers.iter().any(|m| h.contains(m)))
        };

        if !has_heading(CONTEXT_MARKERS) {
            result.add_issue(
                Severity::Error,
                None,
                "Missing 'Current Context' section",
                Some("Add '## Current Context (Source of Truth)' section"),
            );
        }

        if !has_heading(LOG_MARKERS) {
            result.add_issue(
                Severity::Warning,
                None,
                "Missing 'Daily Log' section",
                Some("Add '## Daily Log' section for development entries"),
            );
        }
    }
}
