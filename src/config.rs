//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the moon-phase.toml file.
//! It only covers presentation: the orbital constants of the model are fixed and
//! never configurable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "moon-phase.toml";

/// Application configuration loaded from moon-phase.toml
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// How results are printed
    pub output: OutputConfig,
    /// Calendar command settings
    pub calendar: CalendarConfig,
}

/// Output rendering choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document per result
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Text or JSON
    pub format: OutputFormat,
    /// Prefix text output with the phase symbol
    pub show_symbol: bool,
    /// Append the normalized elongation to text output
    pub show_angle: bool,
}

/// Calendar configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    /// Number of days listed when `--days` is not given
    pub days: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Text,
            show_symbol: true,
            show_angle: false,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        // Slightly longer than one synodic month
        CalendarConfig { days: 30 }
    }
}

impl Config {
    /// Load configuration from moon-phase.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid config file format, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "no config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Save current configuration to the given path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        info!(path = %path.as_ref().display(), "configuration saved");
        Ok(())
    }
}
