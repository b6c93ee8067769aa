//! Audio module
//!
//! The options menu talks to audio through [`AudioMixer`], a named-parameter
//! interface measured in decibels. [`MixerSystem`] is the built-in mixer.

pub mod mixer;

pub use mixer::{AudioMixer, MixerSystem, VolumeGroup};

/// Exposed mixer parameter for the master group
pub const MASTER_PARAM: &str = "MASTER";
/// Exposed mixer parameter for the music group
pub const MUSIC_PARAM: &str = "MUSIC";
/// Exposed mixer parameter for the sound effects group
pub const SFX_PARAM: &str = "SFX";
