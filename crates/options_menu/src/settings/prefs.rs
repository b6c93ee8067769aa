//! Preference stores
//!
//! Small typed key/value storage for settings, in the style of an engine's
//! player preferences. Getters take a default that is returned for missing
//! keys and for keys holding a value of the other type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::SettingsError;

/// A stored preference value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    /// Integer value (also used for booleans as 0/1)
    Int(i64),
    /// Floating point value
    Float(f64),
}

/// Key/value preference storage
pub trait PreferenceStore {
    /// Read a float, or `default` when missing or not a float
    fn get_float(&self, key: &str, default: f32) -> f32;

    /// Store a float
    fn set_float(&mut self, key: &str, value: f32);

    /// Read an integer, or `default` when missing or not an integer
    fn get_int(&self, key: &str, default: i32) -> i32;

    /// Store an integer
    fn set_int(&mut self, key: &str, value: i32);

    /// Whether a value exists for `key`
    fn has_key(&self, key: &str) -> bool;

    /// Remove `key`
    fn delete_key(&mut self, key: &str);

    /// Flush pending writes to the backing storage
    fn save(&mut self) -> Result<(), SettingsError>;
}

/// In-memory preference store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, PrefValue>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw stored value
    pub fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).copied()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_float(&self, key: &str, default: f32) -> f32 {
        match self.values.get(key) {
            #[allow(clippy::cast_possible_truncation)]
            Some(PrefValue::Float(value)) => *value as f32,
            _ => default,
        }
    }

    fn set_float(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), PrefValue::Float(f64::from(value)));
    }

    fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.values.get(key) {
            Some(PrefValue::Int(value)) => i32::try_from(*value).unwrap_or(default),
            _ => default,
        }
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), PrefValue::Int(i64::from(value)));
    }

    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn delete_key(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn save(&mut self) -> Result<(), SettingsError> {
        Ok(())
    }
}

/// Preference store persisted as a flat TOML table
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    table: MemoryPreferenceStore,
}

impl FilePreferenceStore {
    /// Open the store at `path`
    ///
    /// A missing file starts an empty store. A file that cannot be parsed is
    /// logged and ignored, so every key falls back to its default.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();

        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => match contents.parse::<toml::Table>() {
                Ok(table) => read_table(table),
                Err(e) => {
                    log::warn!("Ignoring unreadable preferences at {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No preferences at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(SettingsError::Io(e)),
        };

        Ok(Self {
            path,
            table: MemoryPreferenceStore { values },
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Keep the integer and float entries of a parsed preference file
fn read_table(table: toml::Table) -> BTreeMap<String, PrefValue> {
    table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::Integer(value) => Some((key, PrefValue::Int(value))),
            toml::Value::Float(value) => Some((key, PrefValue::Float(value))),
            other => {
                log::warn!("Ignoring preference {key}: unsupported {} value", other.type_str());
                None
            }
        })
        .collect()
}

impl PreferenceStore for FilePreferenceStore {
    fn get_float(&self, key: &str, default: f32) -> f32 {
        self.table.get_float(key, default)
    }

    fn set_float(&mut self, key: &str, value: f32) {
        self.table.set_float(key, value);
    }

    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.table.get_int(key, default)
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.table.set_int(key, value);
    }

    fn has_key(&self, key: &str) -> bool {
        self.table.has_key(key)
    }

    fn delete_key(&mut self, key: &str) {
        self.table.delete_key(key);
    }

    fn save(&mut self) -> Result<(), SettingsError> {
        let contents = toml::to_string_pretty(&self.table.values)
            .map_err(|e| SettingsError::Toml(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;

        log::debug!("Saved {} preferences to {}", self.table.len(), self.path.display());
        Ok(())
    }
}
