//! CLI command definitions and handlers

mod init;
mod report;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log File Genius - keep CHANGELOG and DEVLOG files healthy
#[derive(Parser, Debug)]
#[command(name = "logfile-genius")]
#[command(
    version,
    about = "Validate CHANGELOG/DEVLOG log files, score their health, and render reports",
    long_about = "Log File Genius checks your CHANGELOG.md and DEVLOG.md against format rules \
and token budgets, then summarises the result as a 0-100 health score.\n\n\
Configuration is read from .logfile-config.yml in the project root (override with --config).",
    after_help = "\
Examples:
  logfile-genius validate                       Validate both log files
  logfile-genius validate --changelog --strict  Fail on CHANGELOG warnings
  logfile-genius validate --json                JSON output for scripting
  logfile-genius report --format html -o report.html
  logfile-genius init                           Write an example config"
)]
pub struct Cli {
    /// Project root that log paths are relative to
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate log files against format rules and token budgets
    #[command(after_help = "\
Exit codes:
  0  All validations passed
  1  Warnings found (with --strict)
  2  Errors found")]
    Validate {
        /// Validate only the CHANGELOG
        #[arg(long, conflicts_with = "devlog")]
        changelog: bool,

        /// Validate only the DEVLOG
        #[arg(long)]
        devlog: bool,

        /// Exit with code 1 when warnings are present
        #[arg(long)]
        strict: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Config file path (default: .logfile-config.yml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate a health report with token status and recommendations
    #[command(after_help = "\
Exit codes:
  0  Health score 90 or above
  1  Health score from 50 to 89
  2  Health score below 50")]
    Report {
        /// Output format: markdown (or md), html, json, text
        #[arg(long, short = 'f', default_value = "markdown", value_parser = ["markdown", "md", "html", "json", "text"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Config file path (default: .logfile-config.yml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write an example .logfile-config.yml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Run the parsed command and return the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Validate {
            changelog,
            devlog,
            strict,
            json,
            config,
        } => {
            let scope = if changelog {
                crate::validator::Scope::Changelog
            } else if devlog {
                crate::validator::Scope::Devlog
            } else {
                crate::validator::Scope::All
            };
            validate::run(&cli.root, config.as_deref(), scope, strict, json)
        }

        Commands::Report {
            format,
            output,
            config,
        } => report::run(&cli.root, config.as_deref(), &format, output.as_deref()),

        Commands::Init { force } => {
            init::run(&cli.root, force)?;
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validate_flags() {
        let cli = Cli::try_parse_from([
            "logfile-genius",
            "validate",
            "--changelog",
            "--strict",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate {
                changelog,
                devlog,
                strict,
                json,
                config,
            } => {
                assert!(changelog && strict && json);
                assert!(!devlog);
                assert!(config.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_scope_flags_conflict() {
        assert!(
            Cli::try_parse_from(["logfile-genius", "validate", "--changelog", "--devlog"]).is_err()
        );
    }

    #[test]
    fn test_report_defaults_to_markdown() {
        let cli = Cli::try_parse_from(["logfile-genius", "report"]).unwrap();
        match cli.command {
            Commands::Report { format, output, .. } => {
                assert_eq!(format, "markdown");
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_root_after_subcommand() {
        let cli = Cli::try_parse_from(["logfile-genius", "report", "--root", "/tmp/x"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/tmp/x"));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["logfile-genius", "report", "--format", "sarif"]).is_err());
    }
}
