//! Persisted setting values
//!
//! `SettingValues` is the only aggregate written to storage. Audio levels are
//! held in decibels, exactly as the mixer reports them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::volume::{decibels_to_percent, percent_to_decibels};

/// Default master slider position in percent
pub const DEFAULT_MASTER_PERCENT: f32 = 75.0;
/// Default music slider position in percent
pub const DEFAULT_MUSIC_PERCENT: f32 = 60.0;
/// Default SFX slider position in percent
pub const DEFAULT_SFX_PERCENT: f32 = 80.0;

/// Screen resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Resolution {
    /// Create a resolution
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Error parsing a `"W x H"` resolution label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid resolution label: {0:?}")]
pub struct ParseResolutionError(pub String);

impl FromStr for Resolution {
    type Err = ParseResolutionError;

    /// Parse `"1920 x 1080"` (or `"1920x1080"`), splitting at the first `x`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseResolutionError(s.to_string());

        let index = s.find('x').filter(|&i| i > 0).ok_or_else(invalid)?;
        let width = s[..index].trim().parse().map_err(|_| invalid())?;
        let height = s[index + 1..].trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(width, height))
    }
}

/// Mixer levels in decibels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioValues {
    /// Master level (dB)
    pub master_volume: f32,
    /// Music level (dB)
    pub music_volume: f32,
    /// Sound effects level (dB)
    pub sfx_volume: f32,
}

impl AudioValues {
    /// Build levels from slider percentages `[master, music, sfx]`
    pub fn from_percent(percent: [f32; 3]) -> Self {
        Self {
            master_volume: percent_to_decibels(percent[0]),
            music_volume: percent_to_decibels(percent[1]),
            sfx_volume: percent_to_decibels(percent[2]),
        }
    }

    /// Slider percentages `[master, music, sfx]` for these levels
    pub fn to_percent(&self) -> [f32; 3] {
        [
            decibels_to_percent(self.master_volume),
            decibels_to_percent(self.music_volume),
            decibels_to_percent(self.sfx_volume),
        ]
    }
}

impl Default for AudioValues {
    fn default() -> Self {
        Self::from_percent([DEFAULT_MASTER_PERCENT, DEFAULT_MUSIC_PERCENT, DEFAULT_SFX_PERCENT])
    }
}

/// Display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoValues {
    /// Output resolution
    pub resolution: Resolution,
    /// Vertical sync
    pub vsync: bool,
    /// Depth-of-field post effect
    pub depth_of_field: bool,
    /// Fullscreen window instead of windowed
    pub fullscreen: bool,
}

impl Default for VideoValues {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            vsync: true,
            depth_of_field: true,
            fullscreen: false,
        }
    }
}

/// Everything the options menu persists
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingValues {
    /// Display settings
    pub video_values: VideoValues,
    /// Mixer levels
    pub audio_values: AudioValues,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let values = SettingValues::default();
        let [master, music, sfx] = values.audio_values.to_percent();

        assert_relative_eq!(master, 75.0, epsilon = 1e-3);
        assert_relative_eq!(music, 60.0, epsilon = 1e-3);
        assert_relative_eq!(sfx, 80.0, epsilon = 1e-3);
        assert_eq!(values.video_values.resolution, Resolution::new(1920, 1080));
        assert!(values.video_values.vsync);
        assert!(values.video_values.depth_of_field);
        assert!(!values.video_values.fullscreen);
    }

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::new(2560, 1440).to_string(), "2560 x 1440");
    }

    #[test]
    fn test_resolution_parse() {
        assert_eq!("1280 x 720".parse(), Ok(Resolution::new(1280, 720)));
        assert_eq!("3840x2160".parse(), Ok(Resolution::new(3840, 2160)));
        assert_eq!(" 800 x 600 ".parse(), Ok(Resolution::new(800, 600)));
    }

    #[test]
    fn test_resolution_parse_rejects_garbage() {
        assert!("x 720".parse::<Resolution>().is_err());
        assert!("1920".parse::<Resolution>().is_err());
        assert!("wide x 1080".parse::<Resolution>().is_err());
        assert!("1920 x tall".parse::<Resolution>().is_err());
        assert!("-1920 x 1080".parse::<Resolution>().is_err());
    }

    #[test]
    fn test_json_layout() {
        let json = serde_json::to_value(SettingValues::default()).unwrap();
        assert_eq!(json["video_values"]["resolution"]["width"], 1920);
        assert_eq!(json["video_values"]["vsync"], true);
        assert!(json["audio_values"]["master_volume"].is_number());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let values: SettingValues =
            serde_json::from_str(r#"{ "video_values": { "vsync": false } }"#).unwrap();

        assert!(!values.video_values.vsync);
        assert_eq!(values.video_values.resolution, Resolution::default());
        assert_eq!(values.audio_values, AudioValues::default());
    }
}
