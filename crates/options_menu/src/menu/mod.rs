//! Options menu
//!
//! - element: widget composition and the panel visibility state machine
//! - sections: the audio and video settings panels
//! - audio_settings / video_settings: bind panel widgets to the mixer and display
//! - option_settings: loads settings at startup and saves them at shutdown
//! - options_menu: top-level owner wiring UI, events, mixer and display together
//!
//! Widgets raise events; subscribed handlers translate them into
//! [`MenuAction`]s which the menu applies once per frame.

pub mod element;
pub mod sections;
pub mod audio_settings;
pub mod video_settings;
pub mod option_settings;
pub mod options_menu;

#[cfg(test)]
mod tests;

pub use element::OptionsMenuElement;
pub use sections::{AudioSection, SettingsSection, VideoSection};
pub use audio_settings::AudioSettings;
pub use video_settings::VideoSettings;
pub use option_settings::OptionSettings;
pub use options_menu::OptionsMenu;

use crate::audio::VolumeGroup;
use crate::events::{Event, EventSystem, EventType, SubscriptionId};
use crate::ui::UINodeId;

/// Which part of the options menu is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptionType {
    /// Menu hidden
    #[default]
    None,
    /// Audio / Video / Back choice buttons
    Choices,
    /// Audio settings panel
    Audio,
    /// Video settings panel
    Video,
    /// Resume / Settings / Quit pause buttons
    InGame,
}

/// What a widget interaction asks the menu to do
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    /// Switch the visible panel
    Navigate(OptionType),
    /// Quit button pressed
    Quit,
    /// Volume slider moved (percent)
    SetVolume(VolumeGroup, f32),
    /// Resolution dropdown changed (`"W x H"` label)
    SelectResolution(String),
    /// Fullscreen toggle changed
    SetFullscreen(bool),
    /// V-Sync toggle changed
    SetVSync(bool),
    /// Depth of field toggle changed
    SetDepthOfField(bool),
    /// Accept Changes pressed
    AcceptVideoChanges,
}

/// Subscribe a button so clicking it yields `action`
pub(crate) fn on_click(
    events: &mut EventSystem<MenuAction>,
    button: UINodeId,
    action: MenuAction,
) -> SubscriptionId {
    events.subscribe(EventType::ButtonClicked, Some(button), move |_: &Event| Some(action.clone()))
}

/// Remove every subscription in `subscriptions`
pub(crate) fn unsubscribe_all(events: &mut EventSystem<MenuAction>, subscriptions: &mut Vec<SubscriptionId>) {
    for id in subscriptions.drain(..) {
        events.unsubscribe(id);
    }
}
