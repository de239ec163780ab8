//! Configuration.
//!
//! Loaded from .barlog.yml or ~/.config/barlog/barlog.yml

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::correlate::DEFAULT_OUTCOMES;
use crate::event::EventKind;

/// Configuration for barlog.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Log file discovery settings.
    pub files: FilesConfig,

    /// Correlation settings.
    pub correlation: CorrelationConfig,
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .barlog.yml in current directory
    /// 3. ~/.config/barlog/barlog.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project config
        let project_config = PathBuf::from(".barlog.yml");
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from .barlog.yml");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load .barlog.yml: {}", e);
                }
            }
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("barlog").join("barlog.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // Use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.files.prefix.is_empty() {
            eyre::bail!("files.prefix must not be empty");
        }
        if self.correlation.outcomes.is_empty() {
            eyre::bail!("correlation.outcomes must not be empty");
        }
        Ok(())
    }
}

/// Which files under the root count as device logs.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Basename prefix a log file must carry.
    pub prefix: String,

    /// Basenames containing this marker are skipped (notebook
    /// checkpoints and similar editor droppings).
    #[serde(rename = "exclude-marker")]
    pub exclude_marker: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            prefix: "log".to_string(),
            exclude_marker: "checkpoint".to_string(),
        }
    }
}

/// Correlation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Event kinds treated as outcomes of a user action.
    pub outcomes: Vec<EventKind>,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            outcomes: DEFAULT_OUTCOMES.to_vec(),
        }
    }
}
