//! Audio panel controller
//!
//! Binds the three volume sliders to the mixer. Sliders show percent, the
//! mixer stores decibels; conversion goes through [`crate::settings::volume`].

use super::sections::{AudioSection, VOLUME_MAX, VOLUME_MIN};
use super::{unsubscribe_all, MenuAction};
use crate::audio::{AudioMixer, VolumeGroup};
use crate::events::{Event, EventSystem, EventType, SubscriptionId};
use crate::settings::{decibels_to_percent, percent_to_decibels, AudioValues, MIN_DB};
use crate::ui::{UIManager, UINodeId};

/// Keeps the mixer in step with the volume sliders
#[derive(Debug)]
pub struct AudioSettings {
    sliders: [(VolumeGroup, UINodeId); 3],
    values: AudioValues,
    subscriptions: Vec<SubscriptionId>,
    initialized: bool,
}

impl AudioSettings {
    /// Controller for `section` starting from the loaded `values`
    pub const fn new(section: &AudioSection, values: AudioValues) -> Self {
        Self {
            sliders: [
                (VolumeGroup::Master, section.master_volume_slider),
                (VolumeGroup::Music, section.music_volume_slider),
                (VolumeGroup::SFX, section.sfx_volume_slider),
            ],
            values,
            subscriptions: Vec::new(),
            initialized: false,
        }
    }

    /// Show the loaded levels on the sliders and push them to the mixer
    ///
    /// Does nothing when already initialized.
    pub fn init(
        &mut self,
        ui: &mut UIManager,
        events: &mut EventSystem<MenuAction>,
        mixer: &mut dyn AudioMixer,
    ) {
        if self.initialized {
            return;
        }

        let levels = [
            self.values.master_volume,
            self.values.music_volume,
            self.values.sfx_volume,
        ];
        for ((_, slider), db) in self.sliders.iter().zip(levels) {
            ui.set_slider_value_without_notify(*slider, decibels_to_percent(db));
        }

        for (group, slider) in self.sliders {
            let id = events.subscribe(EventType::SliderChanged, Some(slider), move |event: &Event| {
                event.get_value().map(|value| MenuAction::SetVolume(group, value))
            });
            self.subscriptions.push(id);
        }

        for (group, slider) in self.sliders {
            if let Some(percent) = ui.get_slider(slider).map(|s| s.value) {
                Self::apply_volume(mixer, group, percent);
            }
        }

        self.initialized = true;
        log::debug!("Audio settings initialized");
    }

    /// Set a mixer group from a slider percent
    pub fn apply_volume(mixer: &mut dyn AudioMixer, group: VolumeGroup, percent: f32) {
        let db = percent_to_decibels(percent.clamp(VOLUME_MIN, VOLUME_MAX));
        if !mixer.set_float(group.param_name(), db) {
            log::warn!("Could not set {:?} volume to {db:.2} dB", group);
        }
    }

    /// Mixer levels for master, music and sfx
    ///
    /// Parameters the mixer does not expose read as muted.
    pub fn current_decibel_levels(mixer: &dyn AudioMixer) -> AudioValues {
        let level = |group: VolumeGroup| mixer.get_float(group.param_name()).unwrap_or(MIN_DB);
        AudioValues {
            master_volume: level(VolumeGroup::Master),
            music_volume: level(VolumeGroup::Music),
            sfx_volume: level(VolumeGroup::SFX),
        }
    }

    /// Drop the slider handlers
    pub fn dispose(&mut self, events: &mut EventSystem<MenuAction>) {
        unsubscribe_all(events, &mut self.subscriptions);
        self.initialized = false;
    }

    /// Whether [`init`](Self::init) has run since the last dispose
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Levels loaded at startup
    pub const fn values(&self) -> &AudioValues {
        &self.values
    }
}
