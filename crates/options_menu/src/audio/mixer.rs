//! Audio mixer system
//!
//! Manages volume groups and exposes their levels as named decibel
//! parameters. Provides independent volume control for different
//! categories of sounds.

use std::collections::HashMap;

use super::{MASTER_PARAM, MUSIC_PARAM, SFX_PARAM};
use crate::settings::volume::MIN_DB;

/// Named-parameter mixer interface
///
/// Levels are in decibels. Unknown parameter names are rejected.
pub trait AudioMixer {
    /// Set an exposed parameter, returning false when it does not exist
    fn set_float(&mut self, name: &str, value: f32) -> bool;

    /// Read an exposed parameter
    fn get_float(&self, name: &str) -> Option<f32>;
}

/// Volume group categories for independent volume control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeGroup {
    /// Master volume (affects all sounds)
    Master,
    /// Background music
    Music,
    /// Sound effects
    SFX,
}

impl VolumeGroup {
    /// All groups, master first
    pub const ALL: [Self; 3] = [Self::Master, Self::Music, Self::SFX];

    /// Exposed parameter name for this group
    pub const fn param_name(self) -> &'static str {
        match self {
            Self::Master => MASTER_PARAM,
            Self::Music => MUSIC_PARAM,
            Self::SFX => SFX_PARAM,
        }
    }

    /// Group for an exposed parameter name
    pub fn from_param(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.param_name() == name)
    }
}

/// Audio mixer managing volume groups and mixing
pub struct MixerSystem {
    /// Attenuation for each group in decibels (-80 to 0)
    group_levels: HashMap<VolumeGroup, f32>,
    /// Mute state for each group
    group_muted: HashMap<VolumeGroup, bool>,
}

impl MixerSystem {
    /// Create a new mixer system with every group at 0 dB
    pub fn new() -> Self {
        let group_levels = VolumeGroup::ALL.into_iter().map(|group| (group, 0.0)).collect();

        Self {
            group_levels,
            group_muted: HashMap::new(),
        }
    }

    /// Set level for a specific group in decibels, clamped to [-80, 0]
    ///
    /// NaN mutes the group.
    pub fn set_group_level(&mut self, group: VolumeGroup, db: f32) {
        let clamped = if db.is_nan() { MIN_DB } else { db.clamp(MIN_DB, 0.0) };
        self.group_levels.insert(group, clamped);
        log::trace!("Mixer {:?} -> {:.2} dB", group, clamped);
    }

    /// Get level for a specific group in decibels
    pub fn get_group_level(&self, group: VolumeGroup) -> f32 {
        self.group_levels.get(&group).copied().unwrap_or(0.0)
    }

    /// Linear gain (0.0 to 1.0) for a group's own level
    pub fn get_group_gain(&self, group: VolumeGroup) -> f32 {
        db_to_gain(self.get_group_level(group))
    }

    /// Get effective gain for a group (considering master level and mute)
    pub fn get_effective_volume(&self, group: VolumeGroup) -> f32 {
        if self.is_muted(group) || self.is_muted(VolumeGroup::Master) {
            return 0.0;
        }

        if group == VolumeGroup::Master {
            return self.get_group_gain(group);
        }

        self.get_group_gain(group) * self.get_group_gain(VolumeGroup::Master)
    }

    /// Mute a volume group
    pub fn mute_group(&mut self, group: VolumeGroup) {
        self.group_muted.insert(group, true);
    }

    /// Unmute a volume group
    pub fn unmute_group(&mut self, group: VolumeGroup) {
        self.group_muted.insert(group, false);
    }

    /// Check if a group is muted
    pub fn is_muted(&self, group: VolumeGroup) -> bool {
        self.group_muted.get(&group).copied().unwrap_or(false)
    }

    /// Toggle mute state for a group
    pub fn toggle_mute(&mut self, group: VolumeGroup) {
        let is_muted = self.is_muted(group);
        self.group_muted.insert(group, !is_muted);
    }
}

impl AudioMixer for MixerSystem {
    fn set_float(&mut self, name: &str, value: f32) -> bool {
        match VolumeGroup::from_param(name) {
            Some(group) => {
                self.set_group_level(group, value);
                true
            }
            None => {
                log::warn!("Mixer has no exposed parameter {name:?}");
                false
            }
        }
    }

    fn get_float(&self, name: &str) -> Option<f32> {
        VolumeGroup::from_param(name).map(|group| self.get_group_level(group))
    }
}

impl Default for MixerSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Decibels to linear gain; the mute floor is silent
fn db_to_gain(db: f32) -> f32 {
    if db <= MIN_DB {
        0.0
    } else {
        10.0_f32.powf(db / 20.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_levels() {
        let mixer = MixerSystem::new();
        assert_eq!(mixer.get_group_level(VolumeGroup::Master), 0.0);
        assert_eq!(mixer.get_float(SFX_PARAM), Some(0.0));
    }

    #[test]
    fn test_named_parameters() {
        let mut mixer = MixerSystem::new();
        assert!(mixer.set_float(MUSIC_PARAM, -12.0));
        assert_eq!(mixer.get_group_level(VolumeGroup::Music), -12.0);
        assert!(!mixer.set_float("AMBIENT", -3.0));
        assert_eq!(mixer.get_float("AMBIENT"), None);
    }

    #[test]
    fn test_level_clamping() {
        let mut mixer = MixerSystem::new();
        mixer.set_group_level(VolumeGroup::SFX, 6.0);
        assert_eq!(mixer.get_group_level(VolumeGroup::SFX), 0.0);

        mixer.set_group_level(VolumeGroup::SFX, -120.0);
        assert_eq!(mixer.get_group_level(VolumeGroup::SFX), MIN_DB);

        mixer.set_group_level(VolumeGroup::Music, f32::NAN);
        assert_eq!(mixer.get_group_level(VolumeGroup::Music), MIN_DB);
    }

    #[test]
    fn test_effective_volume_with_master() {
        let mut mixer = MixerSystem::new();
        mixer.set_group_level(VolumeGroup::Master, -6.0206);
        mixer.set_group_level(VolumeGroup::SFX, -6.0206);

        assert_relative_eq!(mixer.get_effective_volume(VolumeGroup::SFX), 0.25, epsilon = 1e-4);
        assert_relative_eq!(mixer.get_effective_volume(VolumeGroup::Master), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_mute_floor_is_silent() {
        let mut mixer = MixerSystem::new();
        mixer.set_group_level(VolumeGroup::Music, MIN_DB);
        assert_eq!(mixer.get_effective_volume(VolumeGroup::Music), 0.0);
    }

    #[test]
    fn test_mute() {
        let mut mixer = MixerSystem::new();
        mixer.mute_group(VolumeGroup::SFX);
        assert_eq!(mixer.get_effective_volume(VolumeGroup::SFX), 0.0);

        mixer.toggle_mute(VolumeGroup::SFX);
        assert_eq!(mixer.get_effective_volume(VolumeGroup::SFX), 1.0);

        mixer.mute_group(VolumeGroup::Master);
        assert_eq!(mixer.get_effective_volume(VolumeGroup::Music), 0.0);
    }
}
