//! Configuration module for Log File Genius
//!
//! This module handles:
//! - Log file paths (CHANGELOG / DEVLOG)
//! - Token budget overrides
//! - Config file discovery and parsing

mod project_config;

pub use project_config::{
    example_config, load_config, load_config_file, parse_config, ConfigError, ConfigFile,
    LogConfig, PathsSection, TargetsSection, TokenTargets, DEFAULT_CONFIG_FILE, MAX_TOKEN_TARGET,
};
