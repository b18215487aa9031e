use crate::analyzer::DecorationConfig;
use crate::domain::prerelease::{self, PreReleaseSpec};
use crate::error::{Result, ScopeTagError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "scopetag.toml";

/// Represents the complete configuration for scope-tag.
///
/// Selects the branch whose head commit drives the resolution and the
/// optional decorations applied to the computed version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default)]
    pub pre_release: PreReleaseConfig,

    #[serde(default)]
    pub build_metadata: Option<String>,
}

fn default_branch() -> String {
    "main".to_string()
}

/// Pre-release decoration settings.
///
/// `timestamp_layout` is a chrono strftime pattern, or one of the shorthands
/// `datetime` (`%Y%m%d%H%M%S`) and `epoch` (Unix seconds).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PreReleaseConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub timestamp_layout: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branch: default_branch(),
            pre_release: PreReleaseConfig::default(),
            build_metadata: None,
        }
    }
}

impl Config {
    /// Reject settings that could never yield a valid version
    pub fn validate(&self) -> Result<()> {
        if self.branch.trim().is_empty() {
            return Err(ScopeTagError::config("Branch name must not be empty"));
        }

        // Empty values mean "not configured"
        if let Some(name) = self.pre_release.name.as_deref() {
            if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(ScopeTagError::config(format!(
                    "Invalid pre-release name '{}': only [0-9A-Za-z-] allowed",
                    name
                )));
            }
        }

        if let Some(layout) = self.pre_release.timestamp_layout.as_deref() {
            prerelease::validate_layout(layout)?;
        }

        Ok(())
    }

    /// Decorations to apply on top of the bumped version
    pub fn decoration(&self) -> DecorationConfig {
        DecorationConfig {
            pre_release: PreReleaseSpec::new(
                self.pre_release.name.clone(),
                self.pre_release.timestamp_layout.clone(),
            ),
            build_metadata: self.build_metadata.clone().filter(|m| !m.is_empty()),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `scopetag.toml` in current directory
/// 3. `.scopetag.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| ScopeTagError::config(e.to_string()))
}
