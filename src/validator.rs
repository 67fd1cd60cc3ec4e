//! Validation run orchestration
//!
//! Checks the CHANGELOG and DEVLOG, then the combined token budget, and
//! returns the results in that fixed order. A missing target produces a
//! single "not found" error and contributes zero tokens to the combined
//! estimate. A target that exists but cannot be read aborts the run.

use crate::checks::{self, budget};
use crate::config::LogConfig;
use crate::models::{FileResult, ResultSet, Severity, TargetKind, TokenUsage};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Which targets a run covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Both files plus the combined budget
    #[default]
    All,
    /// CHANGELOG only
    Changelog,
    /// DEVLOG only
    Devlog,
}

/// Validates the configured log files under a working root
pub struct Validator<'a> {
    root: PathBuf,
    config: &'a LogConfig,
}

impl<'a> Validator<'a> {
    pub fn new(root: impl Into<PathBuf>, config: &'a LogConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Run the validations selected by `scope`
    pub fn run(&self, scope: Scope) -> Result<ResultSet> {
        let results = match scope {
            Scope::All => return self.run_all(),
            Scope::Changelog => vec![self.validate_changelog()?],
            Scope::Devlog => vec![self.validate_devlog()?],
        };
        Ok(ResultSet { results })
    }

    /// Validate both files and the combined budget
    pub fn run_all(&self) -> Result<ResultSet> {
        let changelog = self.validate_changelog()?;
        let devlog = self.validate_devlog()?;
        let combined = self.validate_combined(&[&changelog, &devlog]);

        info!(
            "Validation finished: {} errors, {} warnings",
            changelog.errors + devlog.errors + combined.errors,
            changelog.warnings + devlog.warnings + combined.warnings
        );

        Ok(ResultSet {
            results: vec![changelog, devlog, combined],
        })
    }

    pub fn validate_changelog(&self) -> Result<FileResult> {
        self.validate_file(
            TargetKind::Changelog,
            &self.config.changelog_path,
            self.config.targets.changelog,
        )
    }

    pub fn validate_devlog(&self) -> Result<FileResult> {
        self.validate_file(
            TargetKind::Devlog,
            &self.config.devlog_path,
            self.config.targets.devlog,
        )
    }

    /// Sum the measured estimates and check them against the combined budget
    pub fn validate_combined(&self, files: &[&FileResult]) -> FileResult {
        let current = files
            .iter()
            .filter_map(|r| r.tokens)
            .map(|t| t.current)
            .sum();
        budget::check_combined_budget(TokenUsage::new(current, self.config.targets.combined))
    }

    fn validate_file(&self, kind: TargetKind, file: &str, budget: usize) -> Result<FileResult> {
        let path = self.resolve(file);
        debug!("Validating {} at {}", kind.label(), path.display());

        if !path.is_file() {
            warn!("{} not found at {}", kind.label(), path.display());
            return Ok(not_found(kind, file));
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(checks::check_file(kind, file, &content, budget))
    }

    fn resolve(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

fn not_found(kind: TargetKind, file: &str) -> FileResult {
    let file_name = Path::new(file)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string());
    let mut result = FileResult::new(file, kind);
    result.add_issue(
        Severity::Error,
        None,
        format!("{} not found at {}", kind.label(), file),
        Some(format!("Run the installer to create {}", file_name).as_str()),
    );
    result
}
