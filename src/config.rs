//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orbitmap/orbitmap.toml`
//! 3. Environment variables: `ORBITMAP_*` prefix

use std::fs;
use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Cannot determine config directory")]
    NoConfigDir,

    #[error("Failed to write config file: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to serialize config template: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Default transfer endpoints for the `transfers` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Body id whose orbit target a transfer starts from
    pub you: String,
    /// Body id whose orbit target a transfer ends at
    pub san: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            you: "YOU".to_string(),
            san: "SAN".to_string(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("you", defaults.you)?
            .set_default("san", defaults.san)?;

        if let Some(path) = global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("ORBITMAP"));

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Write a commented default config to the global location.
    pub fn write_template() -> Result<PathBuf, SettingsError> {
        let path = global_config_path().ok_or(SettingsError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let template = format!(
            "# orbitmap configuration\n# Default endpoints for `orbitmap transfers`\n\n{}",
            toml::to_string_pretty(&Settings::default())?
        );
        fs::write(&path, template)?;
        Ok(path)
    }
}

/// `$XDG_CONFIG_HOME/orbitmap/orbitmap.toml`
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orbitmap").map(|dirs| dirs.config_dir().join("orbitmap.toml"))
}
