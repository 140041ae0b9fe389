//! Persisted parameter defaults.
//!
//! The punctuation set, offset and space-counting choice survive between
//! runs in `~/.trevanion/settings.toml`. A missing file yields the built-in
//! defaults; saving creates the directory as needed.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::CipherParams;
use crate::{DEFAULT_OFFSET, DEFAULT_PUNCTUATION};

/// Errors that can occur when loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Persisted defaults for the cipher parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Trigger punctuation marks.
    pub punctuation: String,

    /// Extraction offset.
    pub offset: usize,

    /// Whether whitespace counts toward the offset.
    pub count_spaces: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            punctuation: DEFAULT_PUNCTUATION.to_string(),
            offset: DEFAULT_OFFSET,
            count_spaces: true,
        }
    }
}

impl Settings {
    /// Loads settings from the default location.
    ///
    /// Returns the built-in defaults if the file doesn't exist.
    pub fn load() -> Result<Self, SettingsError> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Saves settings to the default location.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Path to the settings file.
    pub fn config_path() -> Result<PathBuf, SettingsError> {
        get_config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Converts the stored defaults into cipher parameters (deduplicating
    /// the punctuation and clamping the offset).
    pub fn to_params(&self) -> CipherParams {
        CipherParams::new(&self.punctuation, self.offset, self.count_spaces)
    }
}

/// Returns the configuration directory (`~/.trevanion`).
pub fn get_config_dir() -> Result<PathBuf, SettingsError> {
    dirs::home_dir()
        .map(|home| home.join(".trevanion"))
        .ok_or(SettingsError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.punctuation, DEFAULT_PUNCTUATION);
        assert_eq!(settings.offset, 3);
        assert!(settings.count_spaces);
    }

    #[test]
    fn test_toml_roundtrip() {
        let settings = Settings {
            punctuation: ",.!".to_string(),
            offset: 5,
            count_spaces: false,
        };

        let serialized = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_to_params_normalizes() {
        let settings = Settings {
            punctuation: ",,..".to_string(),
            offset: 0,
            count_spaces: true,
        };

        let params = settings.to_params();
        assert_eq!(params.punctuation.marks(), &[',', '.']);
        assert_eq!(params.offset, 1);
    }
}
