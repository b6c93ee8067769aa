//! Options menu owner
//!
//! Ties the widget tree, the event system, the settings controllers and the
//! engine-facing mixer and display together. Call [`OptionsMenu::update`]
//! once per frame.

use super::element::OptionsMenuElement;
use super::option_settings::OptionSettings;
use super::{MenuAction, OptionType};
use crate::audio::AudioMixer;
use crate::core::config::MenuConfig;
use crate::events::EventSystem;
use crate::settings::{PreferenceStore, SaveSettings, SettingValues, SettingsError};
use crate::ui::UIManager;
use crate::video::VideoOutput;

/// In-game options menu
pub struct OptionsMenu<M: AudioMixer, V: VideoOutput> {
    config: MenuConfig,
    ui: UIManager,
    events: EventSystem<MenuAction>,
    element: OptionsMenuElement,
    settings: OptionSettings,
    mixer: M,
    video: V,
    quit_requested: bool,
}

impl<M: AudioMixer, V: VideoOutput> OptionsMenu<M, V> {
    /// Build the menu and load persisted settings
    ///
    /// `store` backs [`SaveType::PreferenceStore`](crate::settings::SaveType);
    /// the JSON backend writes to [`MenuConfig::json_path`].
    pub fn new(config: MenuConfig, mixer: M, video: V, store: Box<dyn PreferenceStore>) -> Result<Self, SettingsError> {
        config.validate().map_err(SettingsError::Config)?;

        let mut ui = UIManager::new();
        let element = OptionsMenuElement::build(&mut ui);
        let save_settings = SaveSettings::new(config.save_type, config.json_path(), store);
        let settings = OptionSettings::new(&element, save_settings)?;

        log::info!("Options menu created ({} backend)", config.save_type);
        Ok(Self {
            config,
            ui,
            events: EventSystem::new(),
            element,
            settings,
            mixer,
            video,
            quit_requested: false,
        })
    }

    /// Hide the menu, hook up every widget and push loaded levels to the mixer
    pub fn init(&mut self) {
        let current = self.settings.values().video_values.resolution;
        self.element.init(&mut self.ui, &mut self.events, &self.config.supported_resolutions, current);
        self.settings.init(&mut self.ui, &mut self.events, &mut self.mixer);
    }

    /// Run one frame of UI input and apply whatever it produced
    pub fn update(&mut self, delta_time: f32) {
        self.ui.update(delta_time);
        self.handle_events();
    }

    /// Dispatch pending widget events and apply the resulting actions
    ///
    /// Returns how many actions were applied.
    pub fn handle_events(&mut self) -> usize {
        for event in self.ui.take_events() {
            self.events.send(event);
        }

        let actions = self.events.dispatch();
        let count = actions.len();
        for action in actions {
            self.apply(action);
        }
        count
    }

    /// Apply a single action
    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::Navigate(option_type) => self.element.set_option_type(&mut self.ui, option_type),
            MenuAction::Quit => {
                log::info!("Quit requested from the options menu");
                self.quit_requested = true;
            }
            other => {
                self.settings.apply(&other, &mut self.mixer, &mut self.video);
            }
        }
    }

    /// Show the Audio / Video / Back choices
    pub fn open(&mut self) {
        self.element.open_choices(&mut self.ui);
    }

    /// Show the Resume / Settings / Quit pause buttons
    pub fn open_in_game(&mut self) {
        self.element.set_option_type(&mut self.ui, OptionType::InGame);
    }

    /// Panel currently shown
    pub const fn option_type(&self) -> OptionType {
        self.element.current_option_type()
    }

    /// Whether the Quit button has been pressed
    pub const fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Live values as they would be saved now
    pub fn current_values(&self) -> SettingValues {
        self.settings.current_values(&self.mixer)
    }

    /// Unhook every widget and save the current values
    ///
    /// Handlers are removed even when saving fails.
    pub fn shutdown(&mut self) -> Result<SettingValues, SettingsError> {
        self.element.dispose(&mut self.events);
        let saved = self.settings.dispose(&mut self.events, &self.mixer);
        self.events.clear();
        log::info!("Options menu shut down");
        saved
    }

    /// Widget tree
    pub const fn ui(&self) -> &UIManager {
        &self.ui
    }

    /// Mutable widget tree, for feeding input and driving widgets
    pub fn ui_mut(&mut self) -> &mut UIManager {
        &mut self.ui
    }

    /// Event system the widgets are subscribed to
    pub const fn events(&self) -> &EventSystem<MenuAction> {
        &self.events
    }

    /// Menu widgets
    pub const fn element(&self) -> &OptionsMenuElement {
        &self.element
    }

    /// Settings controllers
    pub const fn settings(&self) -> &OptionSettings {
        &self.settings
    }

    /// Audio mixer
    pub const fn mixer(&self) -> &M {
        &self.mixer
    }

    /// Display output
    pub const fn video(&self) -> &V {
        &self.video
    }

    /// Active configuration
    pub const fn config(&self) -> &MenuConfig {
        &self.config
    }
}
