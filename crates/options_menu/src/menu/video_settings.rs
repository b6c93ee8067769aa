//! Video panel controller
//!
//! Widget changes only touch the pending [`VideoValues`]; nothing reaches the
//! display until Accept Changes is pressed.

use super::sections::VideoSection;
use super::{on_click, unsubscribe_all, MenuAction};
use crate::events::{Event, EventSystem, EventType, SubscriptionId};
use crate::settings::{Resolution, VideoValues};
use crate::ui::{UIManager, UINodeId};
use crate::video::{FullScreenMode, VideoOutput};

/// Pending display settings and the widgets editing them
#[derive(Debug)]
pub struct VideoSettings {
    resolution_dropdown: UINodeId,
    fullscreen_toggle: UINodeId,
    vsync_toggle: UINodeId,
    depth_of_field_toggle: UINodeId,
    accept_changes_button: UINodeId,
    values: VideoValues,
    subscriptions: Vec<SubscriptionId>,
}

impl VideoSettings {
    /// Controller for `section` starting from the loaded `values`
    pub const fn new(section: &VideoSection, values: VideoValues) -> Self {
        Self {
            resolution_dropdown: section.resolution_dropdown,
            fullscreen_toggle: section.fullscreen_toggle,
            vsync_toggle: section.vsync_toggle,
            depth_of_field_toggle: section.depth_of_field_toggle,
            accept_changes_button: section.accept_changes_button,
            values,
            subscriptions: Vec::new(),
        }
    }

    /// Sync the toggles to the pending values and subscribe to the widgets
    pub fn init(&mut self, ui: &mut UIManager, events: &mut EventSystem<MenuAction>) {
        ui.set_toggle_value_without_notify(self.fullscreen_toggle, self.values.fullscreen);
        ui.set_toggle_value_without_notify(self.vsync_toggle, self.values.vsync);
        ui.set_toggle_value_without_notify(self.depth_of_field_toggle, self.values.depth_of_field);

        unsubscribe_all(events, &mut self.subscriptions);

        self.subscriptions.push(events.subscribe(
            EventType::DropdownChanged,
            Some(self.resolution_dropdown),
            |event: &Event| event.get_choice().map(|choice| MenuAction::SelectResolution(choice.to_string())),
        ));

        let toggles: [(UINodeId, fn(bool) -> MenuAction); 3] = [
            (self.fullscreen_toggle, MenuAction::SetFullscreen),
            (self.vsync_toggle, MenuAction::SetVSync),
            (self.depth_of_field_toggle, MenuAction::SetDepthOfField),
        ];
        for (toggle, action) in toggles {
            self.subscriptions.push(events.subscribe(
                EventType::ToggleChanged,
                Some(toggle),
                move |event: &Event| event.get_toggled().map(action),
            ));
        }

        self.subscriptions.push(on_click(
            events,
            self.accept_changes_button,
            MenuAction::AcceptVideoChanges,
        ));

        log::debug!("Video settings initialized");
    }

    /// Take a `"W x H"` label as the pending resolution
    ///
    /// Labels that do not parse are ignored.
    pub fn set_resolution(&mut self, label: &str) {
        match label.parse::<Resolution>() {
            Ok(resolution) => self.values.resolution = resolution,
            Err(err) => log::debug!("Ignoring resolution selection: {err}"),
        }
    }

    /// Pending fullscreen flag
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.values.fullscreen = fullscreen;
    }

    /// Pending vsync flag
    pub fn set_vsync(&mut self, vsync: bool) {
        self.values.vsync = vsync;
    }

    /// Pending depth-of-field flag
    pub fn set_depth_of_field(&mut self, depth_of_field: bool) {
        self.values.depth_of_field = depth_of_field;
    }

    /// Push the pending values to the display
    pub fn accept_changes(&self, video: &mut dyn VideoOutput) {
        let VideoValues { resolution, vsync, depth_of_field, fullscreen } = self.values;

        video.set_resolution(resolution.width, resolution.height, FullScreenMode::from_fullscreen(fullscreen));
        video.set_vsync_count(u32::from(vsync));
        if !video.set_depth_of_field(depth_of_field) {
            log::warn!("Post-processing profile has no depth of field effect");
        }

        log::info!(
            "Applied video settings: {resolution}, fullscreen={fullscreen}, vsync={vsync}, depth_of_field={depth_of_field}"
        );
    }

    /// Pending display settings
    pub const fn current_video_values(&self) -> VideoValues {
        self.values
    }

    /// Drop the widget handlers
    pub fn dispose(&mut self, events: &mut EventSystem<MenuAction>) {
        unsubscribe_all(events, &mut self.subscriptions);
    }
}
