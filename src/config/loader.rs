use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, ConnectionOptions};

/// Errors raised while validating connection options or loading profiles.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required connection option '{field}'")]
    MissingField { field: &'static str },

    #[error("Invalid protocol '{value}': expected one of ftp, sftp, ftps")]
    InvalidProtocol { value: String },

    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Profile '{name}' not found in config")]
    ProfileNotFound { name: String },
}

impl Config {
    /// Returns the default path of the profiles file.
    ///
    /// Uses `~/.config/lftp-wrapper/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("lftp-wrapper").join("config.toml")
    }

    /// Loads profiles from the default path, or an empty config if it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads profiles from an explicit path. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Resolve a profile by name, falling back to `default_profile`.
    ///
    /// With neither a name nor a default profile, returns default options so
    /// that every field can come from command-line overrides.
    pub fn profile(&self, name: Option<&str>) -> Result<ConnectionOptions, ConfigError> {
        let Some(name) = name.or(self.default_profile.as_deref()) else {
            return Ok(ConnectionOptions::default());
        };
        self.profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: name.to_string(),
            })
    }
}
