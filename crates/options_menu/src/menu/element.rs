//! Options menu widget composition
//!
//! Owns the node ids of every menu widget and switches which panel is shown.
//! Exactly one panel is visible at a time:
//!
//! | Option type | Visible                                  |
//! |-------------|------------------------------------------|
//! | `None`      | nothing                                  |
//! | `Choices`   | root, choice buttons                     |
//! | `Audio`     | root, element container, audio panel     |
//! | `Video`     | root, element container, video panel     |
//! | `InGame`    | root, in-game buttons                    |

use super::sections::{AudioSection, VideoSection};
use super::{on_click, unsubscribe_all, MenuAction, OptionType};
use crate::events::{EventSystem, SubscriptionId};
use crate::settings::Resolution;
use crate::ui::{UIButton, UIElement, UILayout, UIManager, UINodeId, UIPanel};

const BUTTON_SIZE: (f32, f32) = (240.0, 48.0);
const BUTTON_SPACING: f32 = 16.0;

/// Every widget of the options menu plus the current panel
#[derive(Debug)]
pub struct OptionsMenuElement {
    root: UINodeId,
    options_button_container: UINodeId,
    audio_button: UINodeId,
    video_button: UINodeId,
    back_button: UINodeId,
    in_game_button_container: UINodeId,
    resume_button: UINodeId,
    settings_button: UINodeId,
    quit_button: UINodeId,
    element_container: UINodeId,
    audio: AudioSection,
    video: VideoSection,
    current_option_type: OptionType,
    subscriptions: Vec<SubscriptionId>,
}

/// Add a column of labelled buttons under `container`
fn button_column<const N: usize>(ui: &mut UIManager, container: UINodeId, labels: [&str; N]) -> [UINodeId; N] {
    let positions = UILayout::vertical_stack(N, BUTTON_SIZE, BUTTON_SPACING);
    let mut ids = [UINodeId(0); N];
    for ((id, label), position) in ids.iter_mut().zip(labels).zip(positions) {
        *id = ui.add_button(
            Some(container),
            UIButton::new(label).with_element(UIElement::centered(position, BUTTON_SIZE)),
        );
    }
    ids
}

impl OptionsMenuElement {
    /// Build the full widget tree
    ///
    /// Everything starts visible except the in-game buttons; call
    /// [`init`](Self::init) to hide the menu and hook up navigation.
    pub fn build(ui: &mut UIManager) -> Self {
        let root = ui.add_panel(None, UIPanel::new("options-menu"));

        let options_button_container = ui.add_panel(Some(root), UIPanel::new("options-button-container"));
        let [audio_button, video_button, back_button] =
            button_column(ui, options_button_container, ["Audio Settings", "Video Settings", "Back"]);

        let in_game_button_container = ui.add_panel(Some(root), UIPanel::new("in-game-button-container"));
        let [resume_button, settings_button, quit_button] =
            button_column(ui, in_game_button_container, ["Resume", "Settings", "Quit"]);
        ui.set_visible(in_game_button_container, false);

        let element_container = ui.add_panel(Some(root), UIPanel::new("element-container"));
        let audio = AudioSection::build(ui, element_container);
        let video = VideoSection::build(ui, element_container);

        Self {
            root,
            options_button_container,
            audio_button,
            video_button,
            back_button,
            in_game_button_container,
            resume_button,
            settings_button,
            quit_button,
            element_container,
            audio,
            video,
            current_option_type: OptionType::None,
            subscriptions: Vec::new(),
        }
    }

    /// Hide the menu, hook up navigation buttons and fill the resolution list
    pub fn init(
        &mut self,
        ui: &mut UIManager,
        events: &mut EventSystem<MenuAction>,
        resolutions: &[Resolution],
        current: Resolution,
    ) {
        self.set_option_type(ui, OptionType::None);

        unsubscribe_all(events, &mut self.subscriptions);
        let routes = [
            (self.audio.section.back_button, MenuAction::Navigate(OptionType::Choices)),
            (self.video.section.back_button, MenuAction::Navigate(OptionType::Choices)),
            (self.back_button, MenuAction::Navigate(OptionType::None)),
            (self.audio_button, MenuAction::Navigate(OptionType::Audio)),
            (self.video_button, MenuAction::Navigate(OptionType::Video)),
            (self.resume_button, MenuAction::Navigate(OptionType::None)),
            (self.settings_button, MenuAction::Navigate(OptionType::Choices)),
            (self.quit_button, MenuAction::Quit),
        ];
        self.subscriptions
            .extend(routes.into_iter().map(|(button, action)| on_click(events, button, action)));

        self.video.init(ui, resolutions, current);
        log::debug!("Options menu initialized with {} resolutions", resolutions.len());
    }

    /// Switch the visible panel
    pub fn set_option_type(&mut self, ui: &mut UIManager, option_type: OptionType) {
        for id in [
            self.audio.section.root,
            self.video.section.root,
            self.element_container,
            self.options_button_container,
            self.in_game_button_container,
            self.root,
        ] {
            ui.set_visible(id, false);
        }

        let shown: &[UINodeId] = match option_type {
            OptionType::None => &[],
            OptionType::Choices => &[self.options_button_container, self.root],
            OptionType::Audio => &[self.audio.section.root, self.element_container, self.root],
            OptionType::Video => &[self.video.section.root, self.element_container, self.root],
            OptionType::InGame => &[self.in_game_button_container, self.root],
        };
        for id in shown {
            ui.set_visible(*id, true);
        }

        if self.current_option_type != option_type {
            log::debug!("Options menu {:?} -> {:?}", self.current_option_type, option_type);
        }
        self.current_option_type = option_type;
    }

    /// Panel currently shown
    pub const fn current_option_type(&self) -> OptionType {
        self.current_option_type
    }

    /// Show the choice buttons
    pub fn open_choices(&mut self, ui: &mut UIManager) {
        self.set_option_type(ui, OptionType::Choices);
    }

    /// Drop the navigation handlers
    pub fn dispose(&mut self, events: &mut EventSystem<MenuAction>) {
        unsubscribe_all(events, &mut self.subscriptions);
    }

    /// Number of navigation handlers currently registered
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Menu root panel
    pub const fn root(&self) -> UINodeId {
        self.root
    }

    /// Container of the Audio / Video / Back buttons
    pub const fn options_button_container(&self) -> UINodeId {
        self.options_button_container
    }

    /// Opens the audio panel
    pub const fn audio_button(&self) -> UINodeId {
        self.audio_button
    }

    /// Opens the video panel
    pub const fn video_button(&self) -> UINodeId {
        self.video_button
    }

    /// Closes the menu from the choice buttons
    pub const fn back_button(&self) -> UINodeId {
        self.back_button
    }

    /// Container of the Resume / Settings / Quit buttons
    pub const fn in_game_button_container(&self) -> UINodeId {
        self.in_game_button_container
    }

    /// Closes the pause menu
    pub const fn resume_button(&self) -> UINodeId {
        self.resume_button
    }

    /// Opens the choice buttons from the pause menu
    pub const fn settings_button(&self) -> UINodeId {
        self.settings_button
    }

    /// Requests quitting the game
    pub const fn quit_button(&self) -> UINodeId {
        self.quit_button
    }

    /// Container of both settings panels
    pub const fn element_container(&self) -> UINodeId {
        self.element_container
    }

    /// Audio panel widgets
    pub const fn audio(&self) -> &AudioSection {
        &self.audio
    }

    /// Video panel widgets
    pub const fn video(&self) -> &VideoSection {
        &self.video
    }
}
