//! Settings model and persistence
//!
//! - values: the persisted aggregate (`SettingValues`) and its parts
//! - volume: slider percent <-> mixer decibel conversion
//! - prefs: key/value preference stores (in-memory and file backed)
//! - persistence: backend selection and load/save with defaults

pub mod error;
pub mod values;
pub mod volume;
pub mod prefs;
pub mod persistence;

pub use error::SettingsError;
pub use values::{AudioValues, Resolution, SettingValues, VideoValues};
pub use volume::{decibels_to_percent, percent_to_decibels, MAX_PERCENT, MIN_DB, MIN_PERCENT_NON_ZERO};
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use persistence::{SaveSettings, SaveType};
