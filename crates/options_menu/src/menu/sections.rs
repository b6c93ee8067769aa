//! Settings panels
//!
//! Every panel shares the same skeleton: a header with a title, a settings
//! container stacking the controls, and a Back button underneath.

use crate::settings::Resolution;
use crate::settings::values::{DEFAULT_MASTER_PERCENT, DEFAULT_MUSIC_PERCENT, DEFAULT_SFX_PERCENT};
use crate::ui::{UIButton, UIDropdown, UIElement, UILayout, UIManager, UINodeId, UIPanel, UISlider, UIText, UIToggle};

/// Lowest volume slider value
pub const VOLUME_MIN: f32 = 0.0;
/// Highest volume slider value
pub const VOLUME_MAX: f32 = 100.0;

/// Size of one control row
const ROW_SIZE: (f32, f32) = (360.0, 40.0);
/// Gap between control rows
const ROW_SPACING: f32 = 12.0;

/// Panel skeleton shared by the audio and video panels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSection {
    /// Panel root
    pub root: UINodeId,
    /// Container holding the title
    pub header_container: UINodeId,
    /// Title label
    pub header_label: UINodeId,
    /// Container holding the controls
    pub settings_container: UINodeId,
    /// Container holding the Back button
    pub back_button_container: UINodeId,
    /// Returns to the choice buttons
    pub back_button: UINodeId,
}

impl SettingsSection {
    /// Build the skeleton under `parent`
    pub fn build(ui: &mut UIManager, parent: UINodeId, title: &str, name: &str) -> Self {
        let root = ui.add_panel(Some(parent), UIPanel::new(name));

        let header_container = ui.add_panel(Some(root), UIPanel::new(format!("{name}__header-container")));
        let mut header = UIText::new(title);
        header.element = UIElement::centered((-ROW_SIZE.0 * 0.5, -220.0), ROW_SIZE);
        let header_label = ui.add_text(Some(header_container), header);

        let settings_container = ui.add_panel(Some(root), UIPanel::new(format!("{name}__settings-container")));

        let back_button_container = ui.add_panel(Some(root), UIPanel::new("BackButtonContainer"));
        let back_button = ui.add_button(
            Some(back_button_container),
            UIButton::new("Back").with_element(UIElement::centered((-ROW_SIZE.0 * 0.5, 200.0), ROW_SIZE)),
        );

        Self {
            root,
            header_container,
            header_label,
            settings_container,
            back_button_container,
            back_button,
        }
    }
}

/// Row placements for `count` controls in a settings container
fn rows(count: usize) -> impl Iterator<Item = UIElement> {
    UILayout::vertical_stack(count, ROW_SIZE, ROW_SPACING)
        .into_iter()
        .map(|position| UIElement::centered(position, ROW_SIZE))
}

/// Audio panel: three volume sliders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSection {
    /// Shared skeleton
    pub section: SettingsSection,
    /// Master volume slider
    pub master_volume_slider: UINodeId,
    /// Music volume slider
    pub music_volume_slider: UINodeId,
    /// Sound effects volume slider
    pub sfx_volume_slider: UINodeId,
}

impl AudioSection {
    /// Build the audio panel under `parent`
    pub fn build(ui: &mut UIManager, parent: UINodeId) -> Self {
        let section = SettingsSection::build(ui, parent, "Audio Settings", "audio-settings");
        let container = Some(section.settings_container);

        let mut rows = rows(3);
        let mut add_slider = |ui: &mut UIManager, label: &str, default: f32| {
            let mut slider = UISlider::new(label, VOLUME_MIN, VOLUME_MAX)
                .with_input_field()
                .with_value(default);
            slider.element = rows.next().unwrap_or_default();
            ui.add_slider(container, slider)
        };

        let master_volume_slider = add_slider(ui, "Master Volume", DEFAULT_MASTER_PERCENT);
        let music_volume_slider = add_slider(ui, "Music Volume", DEFAULT_MUSIC_PERCENT);
        let sfx_volume_slider = add_slider(ui, "SFX Volume", DEFAULT_SFX_PERCENT);

        Self {
            section,
            master_volume_slider,
            music_volume_slider,
            sfx_volume_slider,
        }
    }
}

/// Video panel: resolution, display toggles and Accept Changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSection {
    /// Shared skeleton
    pub section: SettingsSection,
    /// Resolution dropdown
    pub resolution_dropdown: UINodeId,
    /// Fullscreen toggle
    pub fullscreen_toggle: UINodeId,
    /// V-Sync toggle
    pub vsync_toggle: UINodeId,
    /// Depth of field toggle
    pub depth_of_field_toggle: UINodeId,
    /// Applies the pending video values
    pub accept_changes_button: UINodeId,
}

impl VideoSection {
    /// Build the video panel under `parent`
    pub fn build(ui: &mut UIManager, parent: UINodeId) -> Self {
        let section = SettingsSection::build(ui, parent, "Video Settings", "video-settings");
        let container = Some(section.settings_container);
        let mut rows = rows(5);
        let mut next_row = || rows.next().unwrap_or_default();

        let mut dropdown = UIDropdown::new("Resolution");
        dropdown.value = Resolution::default().to_string();
        dropdown.element = next_row();
        let resolution_dropdown = ui.add_dropdown(container, dropdown);

        let add_toggle = |ui: &mut UIManager, label: &str, element: UIElement| {
            let mut toggle = UIToggle::new(label);
            toggle.element = element;
            ui.add_toggle(container, toggle)
        };
        let fullscreen_toggle = add_toggle(ui, "Fullscreen", next_row());
        let vsync_toggle = add_toggle(ui, "V-Sync", next_row());
        let depth_of_field_toggle = add_toggle(ui, "Depth of Field", next_row());

        let accept_changes_button = ui.add_button(
            container,
            UIButton::new("Accept Changes")
                .with_tooltip("Apply the changes made to video settings.")
                .with_element(next_row()),
        );

        Self {
            section,
            resolution_dropdown,
            fullscreen_toggle,
            vsync_toggle,
            depth_of_field_toggle,
            accept_changes_button,
        }
    }

    /// Set the resolution choices and select `current` when it is offered
    pub fn init(&self, ui: &mut UIManager, resolutions: &[Resolution], current: Resolution) {
        ui.set_dropdown_choices(
            self.resolution_dropdown,
            resolutions.iter().map(ToString::to_string),
        );

        let current = current.to_string();
        if ui.get_dropdown(self.resolution_dropdown).is_some_and(|d| d.contains(&current)) {
            ui.set_dropdown_value_without_notify(self.resolution_dropdown, current);
        }
    }
}
