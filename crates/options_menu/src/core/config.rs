//! # Menu Configuration
//!
//! Where settings are stored, which backend stores them, and which
//! resolutions the video panel offers.

use serde::{Serialize, Deserialize};
use std::path::PathBuf;

pub use crate::config::{Config, ConfigError};
use crate::settings::{Resolution, SaveType};

/// Default base name of the settings file (without extension)
pub const DEFAULT_FILE_NAME: &str = "settings";

/// Resolutions offered by the video panel unless configured otherwise
pub const SUPPORTED_RESOLUTIONS: [Resolution; 4] = [
    Resolution::new(1280, 720),
    Resolution::new(1920, 1080),
    Resolution::new(2560, 1440),
    Resolution::new(3840, 2160),
];

/// # Options Menu Configuration
///
/// Loaded through the [`Config`] trait from a `.toml` or `.ron` file.
/// Unknown `save_type` values are rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Which persistence backend stores the settings
    pub save_type: SaveType,
    /// Directory holding the settings and preference files
    pub data_dir: PathBuf,
    /// Settings file base name; `.json` is appended for the JSON backend
    pub file_name: String,
    /// Resolutions listed in the resolution dropdown
    pub supported_resolutions: Vec<Resolution>,
}

impl MenuConfig {
    /// Create a configuration storing everything under `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Set the persistence backend
    #[must_use]
    pub fn with_save_type(mut self, save_type: SaveType) -> Self {
        self.save_type = save_type;
        self
    }

    /// Set the settings file base name
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Replace the supported resolution list
    #[must_use]
    pub fn with_resolutions(mut self, resolutions: Vec<Resolution>) -> Self {
        self.supported_resolutions = resolutions;
        self
    }

    /// Path of the JSON settings file
    pub fn json_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.file_name))
    }

    /// Path of the file backing the preference store
    pub fn prefs_path(&self) -> PathBuf {
        self.data_dir.join("preferences.toml")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.file_name.trim().is_empty() {
            return Err("Settings file name cannot be empty".to_string());
        }

        if self.supported_resolutions.is_empty() {
            return Err("At least one supported resolution is required".to_string());
        }

        if let Some(bad) = self.supported_resolutions.iter().find(|r| r.width == 0 || r.height == 0) {
            return Err(format!("Invalid supported resolution: {bad}"));
        }

        Ok(())
    }

    fn default_data_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "rusteroids", "options_menu")
            .map_or_else(|| PathBuf::from("."), |dirs| dirs.data_dir().to_path_buf())
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            save_type: SaveType::default(),
            data_dir: Self::default_data_dir(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            supported_resolutions: SUPPORTED_RESOLUTIONS.to_vec(),
        }
    }
}

impl Config for MenuConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MenuConfig::new("data");
        assert!(config.validate().is_ok());
        assert_eq!(config.save_type, SaveType::PreferenceStore);
        assert_eq!(config.supported_resolutions.len(), 4);
        assert_eq!(config.json_path(), PathBuf::from("data").join("settings.json"));
    }

    #[test]
    fn test_validation_rejects_empty_resolutions() {
        let config = MenuConfig::new("data").with_resolutions(Vec::new());
        assert!(config.validate().is_err());

        let config = MenuConfig::new("data").with_resolutions(vec![Resolution::new(0, 720)]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.toml");

        let config = MenuConfig::new(dir.path())
            .with_save_type(SaveType::JsonFile)
            .with_file_name("options");
        config.save_to_file(&path).unwrap();

        let loaded = MenuConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.ron");

        let config = MenuConfig::new(dir.path()).with_resolutions(vec![Resolution::new(800, 600)]);
        config.save_to_file(&path).unwrap();

        let loaded = MenuConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.supported_resolutions, vec![Resolution::new(800, 600)]);
    }

    #[test]
    fn test_unknown_save_type_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        std::fs::write(&path, "save_type = \"TextFile\"\n").unwrap();

        let result = MenuConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let config = MenuConfig::new("data");
        let result = config.save_to_file("menu.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = MenuConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.file_name, DEFAULT_FILE_NAME);
    }
}
