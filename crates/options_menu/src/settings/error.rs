//! Settings errors

/// Errors raised while loading or saving settings
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// IO error reading or writing a settings file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Preference file encoding error
    #[error("Preference file error: {0}")]
    Toml(String),

    /// Persistence backend selector not recognized
    #[error("Unknown save type: {0:?}")]
    UnknownSaveType(String),

    /// Menu configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
