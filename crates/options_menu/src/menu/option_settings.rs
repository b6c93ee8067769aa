//! Settings lifecycle
//!
//! Loads the persisted values when the menu is created, hands them to the
//! audio and video controllers, and writes the live values back on dispose.

use super::audio_settings::AudioSettings;
use super::element::OptionsMenuElement;
use super::video_settings::VideoSettings;
use super::MenuAction;
use crate::audio::AudioMixer;
use crate::events::EventSystem;
use crate::settings::{SaveSettings, SettingValues, SettingsError};
use crate::ui::UIManager;
use crate::video::VideoOutput;

/// Loaded values, persistence and both panel controllers
#[derive(Debug)]
pub struct OptionSettings {
    save_settings: SaveSettings,
    values: SettingValues,
    audio: AudioSettings,
    video: VideoSettings,
}

impl OptionSettings {
    /// Load persisted values and build the controllers for `element`
    pub fn new(element: &OptionsMenuElement, save_settings: SaveSettings) -> Result<Self, SettingsError> {
        let values = save_settings.load()?;
        log::debug!("Loaded {:?} using {}", values, save_settings.save_type());

        Ok(Self {
            audio: AudioSettings::new(element.audio(), values.audio_values),
            video: VideoSettings::new(element.video(), values.video_values),
            save_settings,
            values,
        })
    }

    /// Initialize both controllers
    pub fn init(
        &mut self,
        ui: &mut UIManager,
        events: &mut EventSystem<MenuAction>,
        mixer: &mut dyn AudioMixer,
    ) {
        self.audio.init(ui, events, mixer);
        self.video.init(ui, events);
    }

    /// Apply a settings action, returning false for actions it does not own
    pub fn apply(&mut self, action: &MenuAction, mixer: &mut dyn AudioMixer, video: &mut dyn VideoOutput) -> bool {
        match action {
            MenuAction::SetVolume(group, percent) => AudioSettings::apply_volume(mixer, *group, *percent),
            MenuAction::SelectResolution(label) => self.video.set_resolution(label),
            MenuAction::SetFullscreen(value) => self.video.set_fullscreen(*value),
            MenuAction::SetVSync(value) => self.video.set_vsync(*value),
            MenuAction::SetDepthOfField(value) => self.video.set_depth_of_field(*value),
            MenuAction::AcceptVideoChanges => self.video.accept_changes(video),
            MenuAction::Navigate(_) | MenuAction::Quit => return false,
        }
        true
    }

    /// Values loaded at startup
    pub const fn values(&self) -> &SettingValues {
        &self.values
    }

    /// Live mixer levels plus pending video values
    pub fn current_values(&self, mixer: &dyn AudioMixer) -> SettingValues {
        SettingValues {
            video_values: self.video.current_video_values(),
            audio_values: AudioSettings::current_decibel_levels(mixer),
        }
    }

    /// Persist the current values
    pub fn save(&mut self, mixer: &dyn AudioMixer) -> Result<SettingValues, SettingsError> {
        let values = self.current_values(mixer);
        self.save_settings.save(&values)?;
        Ok(values)
    }

    /// Save, then tear both controllers down
    ///
    /// The controllers are disposed even when saving fails.
    pub fn dispose(
        &mut self,
        events: &mut EventSystem<MenuAction>,
        mixer: &dyn AudioMixer,
    ) -> Result<SettingValues, SettingsError> {
        let saved = self.save(mixer);
        if let Err(err) = &saved {
            log::warn!("Failed to save settings: {err}");
        }

        self.audio.dispose(events);
        self.video.dispose(events);
        saved
    }

    /// Persistence backend
    pub const fn save_settings(&self) -> &SaveSettings {
        &self.save_settings
    }

    /// Audio panel controller
    pub const fn audio(&self) -> &AudioSettings {
        &self.audio
    }

    /// Video panel controller
    pub const fn video(&self) -> &VideoSettings {
        &self.video
    }
}
