//! Log File Genius - log file validation and health reporting
//!
//! Validates a project's CHANGELOG and DEVLOG against format rules and token
//! budgets, scores the outcome from 0 to 100, and renders the assessment as
//! text, JSON, Markdown, or HTML.
//!
//! # Example
//!
//! ```rust,no_run
//! use logfile_genius::config::load_config;
//! use logfile_genius::models::Report;
//! use logfile_genius::validator::Validator;
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = load_config(root, None);
//! let results = Validator::new(root, &config).run_all()?;
//! let report = Report::generate(results, &config.targets);
//! println!("{}", logfile_genius::reporters::report(&report, "markdown")?);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod recommendations;
pub mod reporters;
pub mod scoring;
pub mod tokens;
pub mod validator;
