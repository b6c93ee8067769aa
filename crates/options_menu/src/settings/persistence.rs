//! Settings persistence
//!
//! Two backends store `SettingValues`: a preference store (one key per value)
//! or a JSON file holding the whole aggregate. Whatever is missing or
//! unreadable loads as its default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::prefs::PreferenceStore;
use super::values::{AudioValues, Resolution, SettingValues, VideoValues};
use super::SettingsError;

/// Preference-store keys
pub mod keys {
    /// Master level (float, dB)
    pub const MASTER_VOLUME: &str = "MasterVolume";
    /// Music level (float, dB)
    pub const MUSIC_VOLUME: &str = "MusicVolume";
    /// Sound effects level (float, dB)
    pub const SFX_VOLUME: &str = "SFXVolume";
    /// Horizontal resolution (int)
    pub const RESOLUTION_WIDTH: &str = "ResolutionWidth";
    /// Vertical resolution (int)
    pub const RESOLUTION_HEIGHT: &str = "ResolutionHeight";
    /// Vertical sync (int, 0/1)
    pub const VSYNC: &str = "VSync";
    /// Depth of field (int, 0/1)
    pub const DEPTH_OF_FIELD: &str = "DepthOfField";
}

/// Persistence backend selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SaveType {
    /// One preference-store key per value
    #[default]
    #[serde(alias = "prefs", alias = "PlayerPrefs")]
    PreferenceStore,
    /// Whole aggregate as a JSON file
    #[serde(alias = "json")]
    JsonFile,
}

impl FromStr for SaveType {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PreferenceStore" | "PlayerPrefs" | "prefs" => Ok(Self::PreferenceStore),
            "JsonFile" | "json" => Ok(Self::JsonFile),
            other => Err(SettingsError::UnknownSaveType(other.to_string())),
        }
    }
}

impl fmt::Display for SaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreferenceStore => f.write_str("PreferenceStore"),
            Self::JsonFile => f.write_str("JsonFile"),
        }
    }
}

/// Loads and saves `SettingValues` through the selected backend
pub struct SaveSettings {
    save_type: SaveType,
    json_path: PathBuf,
    store: Box<dyn PreferenceStore>,
}

impl SaveSettings {
    /// Create a persistence layer
    ///
    /// `json_path` is only used by [`SaveType::JsonFile`] and `store` only by
    /// [`SaveType::PreferenceStore`].
    pub fn new(save_type: SaveType, json_path: impl Into<PathBuf>, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            save_type,
            json_path: json_path.into(),
            store,
        }
    }

    /// Active backend
    pub fn save_type(&self) -> SaveType {
        self.save_type
    }

    /// Switch backend
    pub fn set_save_type(&mut self, save_type: SaveType) {
        self.save_type = save_type;
    }

    /// JSON file location
    pub fn json_path(&self) -> &Path {
        &self.json_path
    }

    /// Preference store backing [`SaveType::PreferenceStore`]
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Persist `values`
    pub fn save(&mut self, values: &SettingValues) -> Result<(), SettingsError> {
        match self.save_type {
            SaveType::PreferenceStore => self.save_preferences(values),
            SaveType::JsonFile => self.save_json_file(values),
        }
    }

    /// Load persisted values, falling back to defaults
    ///
    /// Only IO failures other than a missing file are reported as errors.
    pub fn load(&self) -> Result<SettingValues, SettingsError> {
        match self.save_type {
            SaveType::PreferenceStore => Ok(self.load_preferences()),
            SaveType::JsonFile => self.load_json_file(),
        }
    }

    fn save_json_file(&self, values: &SettingValues) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(values)?;

        if let Some(parent) = self.json_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.json_path, json)?;

        log::info!("Saved settings to {}", self.json_path.display());
        Ok(())
    }

    fn load_json_file(&self) -> Result<SettingValues, SettingsError> {
        let json = match std::fs::read_to_string(&self.json_path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", self.json_path.display());
                return Ok(SettingValues::default());
            }
            Err(e) => return Err(SettingsError::Io(e)),
        };

        match serde_json::from_str::<serde_json::Value>(&json) {
            Ok(document) => {
                log::info!("Loaded settings from {}", self.json_path.display());
                Ok(read_document(&document))
            }
            Err(e) => {
                log::warn!("Invalid settings file {}: {}; using defaults", self.json_path.display(), e);
                Ok(SettingValues::default())
            }
        }
    }

    fn save_preferences(&mut self, values: &SettingValues) -> Result<(), SettingsError> {
        let audio = &values.audio_values;
        let video = &values.video_values;

        self.store.set_float(keys::MASTER_VOLUME, audio.master_volume);
        self.store.set_float(keys::MUSIC_VOLUME, audio.music_volume);
        self.store.set_float(keys::SFX_VOLUME, audio.sfx_volume);

        self.store.set_int(keys::RESOLUTION_WIDTH, to_pref_int(video.resolution.width));
        self.store.set_int(keys::RESOLUTION_HEIGHT, to_pref_int(video.resolution.height));
        self.store.set_int(keys::VSYNC, i32::from(video.vsync));
        self.store.set_int(keys::DEPTH_OF_FIELD, i32::from(video.depth_of_field));

        self.store.save()?;
        log::info!("Saved settings to preference store");
        Ok(())
    }

    fn load_preferences(&self) -> SettingValues {
        let defaults = SettingValues::default();
        let store = self.store.as_ref();

        let audio_values = AudioValues {
            master_volume: store.get_float(keys::MASTER_VOLUME, defaults.audio_values.master_volume),
            music_volume: store.get_float(keys::MUSIC_VOLUME, defaults.audio_values.music_volume),
            sfx_volume: store.get_float(keys::SFX_VOLUME, defaults.audio_values.sfx_volume),
        };

        let default_video = defaults.video_values;
        let video_values = VideoValues {
            resolution: Resolution::new(
                read_dimension(store, keys::RESOLUTION_WIDTH, default_video.resolution.width),
                read_dimension(store, keys::RESOLUTION_HEIGHT, default_video.resolution.height),
            ),
            vsync: store.get_int(keys::VSYNC, i32::from(default_video.vsync)) == 1,
            depth_of_field: store.get_int(keys::DEPTH_OF_FIELD, i32::from(default_video.depth_of_field)) == 1,
            fullscreen: default_video.fullscreen,
        };

        log::info!("Loaded settings from preference store");
        SettingValues { video_values, audio_values }
    }
}

impl fmt::Debug for SaveSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveSettings")
            .field("save_type", &self.save_type)
            .field("json_path", &self.json_path)
            .finish_non_exhaustive()
    }
}

fn to_pref_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Read a resolution dimension; non-positive values are invalid
fn read_dimension(store: &dyn PreferenceStore, key: &str, default: u32) -> u32 {
    let raw = store.get_int(key, to_pref_int(default));
    match u32::try_from(raw) {
        Ok(value) if value > 0 => value,
        _ => {
            log::warn!("Invalid {key} preference {raw}, using {default}");
            default
        }
    }
}

/// Build settings from a JSON document field by field
///
/// Missing, mistyped and out-of-range fields take their defaults without
/// affecting the rest of the document.
fn read_document(document: &serde_json::Value) -> SettingValues {
    let SettingValues { video_values: video, audio_values: audio } = SettingValues::default();

    let audio_values = AudioValues {
        master_volume: read_field(document, "/audio_values/master_volume", audio.master_volume),
        music_volume: read_field(document, "/audio_values/music_volume", audio.music_volume),
        sfx_volume: read_field(document, "/audio_values/sfx_volume", audio.sfx_volume),
    };

    let video_values = VideoValues {
        resolution: Resolution::new(
            read_json_dimension(document, "/video_values/resolution/width", video.resolution.width),
            read_json_dimension(document, "/video_values/resolution/height", video.resolution.height),
        ),
        vsync: read_field(document, "/video_values/vsync", video.vsync),
        depth_of_field: read_field(document, "/video_values/depth_of_field", video.depth_of_field),
        fullscreen: read_field(document, "/video_values/fullscreen", video.fullscreen),
    };

    SettingValues { video_values, audio_values }
}

fn read_field<T: DeserializeOwned>(document: &serde_json::Value, pointer: &str, default: T) -> T {
    let Some(value) = document.pointer(pointer) else {
        return default;
    };

    T::deserialize(value).unwrap_or_else(|e| {
        log::warn!("Invalid settings field {pointer}: {e}; using default");
        default
    })
}

fn read_json_dimension(document: &serde_json::Value, pointer: &str, default: u32) -> u32 {
    match read_field(document, pointer, default) {
        0 => {
            log::warn!("Invalid settings field {pointer}: 0; using {default}");
            default
        }
        value => value,
    }
}
