//! Project-level configuration support
//!
//! Loads path and token-budget overrides from `.logfile-config.yml` (or a
//! `.toml` / `.json` file passed with `--config`).
//!
//! # Configuration Format
//!
//! ```yaml
//! # .logfile-config.yml
//! profile: solo-developer
//!
//! paths:
//!   changelog: logs/CHANGELOG.md
//!   devlog: logs/DEVLOG.md
//!
//! token_targets:
//!   changelog: 10000
//!   devlog: 15000
//!   combined: 25000
//! ```
//!
//! Every key is optional. A config file that cannot be read or parsed is
//! reported as a warning and the defaults are used instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Config file looked up under the working root when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = ".logfile-config.yml";

pub const DEFAULT_CHANGELOG_PATH: &str = "logs/CHANGELOG.md";
pub const DEFAULT_DEVLOG_PATH: &str = "logs/DEVLOG.md";

pub const DEFAULT_CHANGELOG_TARGET: usize = 10_000;
pub const DEFAULT_DEVLOG_TARGET: usize = 15_000;
pub const DEFAULT_COMBINED_TARGET: usize = 25_000;
/// Largest accepted token target
pub const MAX_TOKEN_TARGET: usize = 100_000_000;

/// Errors raised while loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format '{0}' (expected .yml, .yaml, .toml or .json)")]
    UnsupportedFormat(String),

    #[error("token target '{0}' must be between 1 and {max}", max = MAX_TOKEN_TARGET)]
    InvalidBudget(&'static str),
}

/// Raw on-disk shape of the config file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    /// Informational only
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub token_targets: TargetsSection,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PathsSection {
    pub changelog: Option<String>,
    pub devlog: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TargetsSection {
    pub changelog: Option<usize>,
    pub devlog: Option<usize>,
    pub combined: Option<usize>,
}

/// Token budgets for each target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTargets {
    pub changelog: usize,
    pub devlog: usize,
    pub combined: usize,
}

impl Default for TokenTargets {
    fn default() -> Self {
        Self {
            changelog: DEFAULT_CHANGELOG_TARGET,
            devlog: DEFAULT_DEVLOG_TARGET,
            combined: DEFAULT_COMBINED_TARGET,
        }
    }
}

/// Effective, immutable configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// CHANGELOG path as configured (relative to the working root)
    pub changelog_path: String,
    /// DEVLOG path as configured (relative to the working root)
    pub devlog_path: String,
    pub targets: TokenTargets,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            changelog_path: DEFAULT_CHANGELOG_PATH.to_string(),
            devlog_path: DEFAULT_DEVLOG_PATH.to_string(),
            targets: TokenTargets::default(),
        }
    }
}

impl TryFrom<ConfigFile> for LogConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let defaults = TokenTargets::default();
        let target = |value: Option<usize>, default: usize, name: &'static str| match value {
            Some(n) if n == 0 || n > MAX_TOKEN_TARGET => Err(ConfigError::InvalidBudget(name)),
            Some(n) => Ok(n),
            None => Ok(default),
        };

        if let Some(profile) = &file.profile {
            debug!("Config profile: {}", profile);
        }

        Ok(Self {
            changelog_path: file
                .paths
                .changelog
                .unwrap_or_else(|| DEFAULT_CHANGELOG_PATH.to_string()),
            devlog_path: file
                .paths
                .devlog
                .unwrap_or_else(|| DEFAULT_DEVLOG_PATH.to_string()),
            targets: TokenTargets {
                changelog: target(file.token_targets.changelog, defaults.changelog, "changelog")?,
                devlog: target(file.token_targets.devlog, defaults.devlog, "devlog")?,
                combined: target(file.token_targets.combined, defaults.combined, "combined")?,
            },
        })
    }
}

/// Load the effective configuration.
///
/// `explicit` (from `--config`) is resolved against `root` when relative;
/// otherwise [`DEFAULT_CONFIG_FILE`] under `root` is tried. Missing files
/// and malformed files both fall back to defaults.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> LogConfig {
    let path = match explicit {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => root.join(p),
        None => root.join(DEFAULT_CONFIG_FILE),
    };

    if !path.exists() {
        if explicit.is_some() {
            warn!("Config file {} not found, using defaults", path.display());
        } else {
            debug!("No config file at {}, using defaults", path.display());
        }
        return LogConfig::default();
    }

    match load_config_file(&path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Could not load config {}: {}", path.display(), e);
            LogConfig::default()
        }
    }
}

/// Read and parse one config file, choosing the parser by extension
pub fn load_config_file(path: &Path) -> Result<LogConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    parse_config(&content, &ext)
}

/// Parse config text in the given format (`yml`, `yaml`, `toml`, `json`)
pub fn parse_config(content: &str, ext: &str) -> Result<LogConfig, ConfigError> {
    let file: ConfigFile = match ext {
        "yml" | "yaml" => {
            // An empty YAML document means "no overrides"
            if content.trim().is_empty() {
                ConfigFile::default()
            } else {
                serde_yaml_ng::from_str(content)?
            }
        }
        "toml" => toml::from_str(content)?,
        "json" => serde_json::from_str(content)?,
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };
    LogConfig::try_from(file)
}

/// Example config written by `logfile-genius init`
pub fn example_config() -> String {
    format!(
        r#"# Log File Genius configuration
# Paths are relative to the project root.

profile: solo-developer

paths:
  changelog: {DEFAULT_CHANGELOG_PATH}
  devlog: {DEFAULT_DEVLOG_PATH}

# Approximate token budgets (1 token ~ 4 characters)
token_targets:
  changelog: {DEFAULT_CHANGELOG_TARGET}
  devlog: {DEFAULT_DEVLOG_TARGET}
  combined: {DEFAULT_COMBINED_TARGET}
"#
    )
}
