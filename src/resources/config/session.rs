use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{ConfigError, FlightConfig, InputProfile};

const CONFIG_DIR: &str = "heliflight";
const CONFIG_FILE: &str = "flight.yaml";

/// Everything a session is started with, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub flight: FlightConfig,
    pub input: InputProfile,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.flight.validate()?;
        self.input.validate()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path.as_ref())?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path.as_ref())?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// `<user config dir>/heliflight/flight.yaml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from [`SessionConfig::default_path`], falling back to defaults when
    /// the file is absent. A file that exists but is invalid is an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                info!("Loading flight config from {}", path.display());
                Self::load(path)
            }
            _ => {
                info!("No flight config found, using defaults");
                Ok(Self::default())
            }
        }
    }
}
