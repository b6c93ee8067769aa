//! UI Manager
//!
//! Central UI system that owns the node tree, tracks visibility, processes
//! input and queues the events widgets raise.

use super::{UIButton, UIDropdown, UIPanel, UISlider, UIText, UIToggle, UINodeId};
use super::input::{MouseButton, UIInputProcessor};
use super::widgets::{UIElement, UILayout};
use crate::events::{Event, EventArg, EventType};
use crate::foundation::math::Bounds;
use std::collections::HashMap;

/// UI element storage
#[derive(Debug, Clone)]
pub enum UINode {
    /// Container
    Panel(UIPanel),
    /// Label
    Text(UIText),
    /// Clickable button
    Button(UIButton),
    /// Value slider
    Slider(UISlider),
    /// Checkbox
    Toggle(UIToggle),
    /// Choice list
    Dropdown(UIDropdown),
}

impl UINode {
    /// Base element properties
    pub const fn element(&self) -> &UIElement {
        match self {
            Self::Panel(panel) => &panel.element,
            Self::Text(text) => &text.element,
            Self::Button(button) => &button.element,
            Self::Slider(slider) => &slider.element,
            Self::Toggle(toggle) => &toggle.element,
            Self::Dropdown(dropdown) => &dropdown.element,
        }
    }

    /// Mutable base element properties
    pub fn element_mut(&mut self) -> &mut UIElement {
        match self {
            Self::Panel(panel) => &mut panel.element,
            Self::Text(text) => &mut text.element,
            Self::Button(button) => &mut button.element,
            Self::Slider(slider) => &mut slider.element,
            Self::Toggle(toggle) => &mut toggle.element,
            Self::Dropdown(dropdown) => &mut dropdown.element,
        }
    }
}

/// Node plus its place in the tree
struct NodeEntry {
    node: UINode,
    parent: Option<UINodeId>,
    children: Vec<UINodeId>,
}

/// Central UI management system
pub struct UIManager {
    /// UI elements by ID
    nodes: HashMap<UINodeId, NodeEntry>,

    /// Next node ID
    next_id: u64,

    /// Input processor for mouse
    input_processor: UIInputProcessor,

    /// Events raised since the last `take_events`
    outbox: Vec<Event>,

    /// Current screen size
    screen_size: (f32, f32),

    /// Frame counter for timestamps
    frame_counter: u64,
}

impl UIManager {
    /// Create a new UI manager
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            next_id: 0,
            input_processor: UIInputProcessor::new(800.0, 600.0), // Default screen size
            outbox: Vec::new(),
            screen_size: (800.0, 600.0),
            frame_counter: 0,
        }
    }

    fn insert(&mut self, parent: Option<UINodeId>, node: UINode) -> UINodeId {
        let id = UINodeId(self.next_id);
        self.next_id += 1;

        let parent = parent.filter(|parent_id| {
            let known = self.nodes.contains_key(parent_id);
            if !known {
                log::warn!("Parent {:?} does not exist, adding {:?} as a root", parent_id, id);
            }
            known
        });

        if let Some(parent_entry) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent_entry.children.push(id);
        }

        self.nodes.insert(id, NodeEntry { node, parent, children: Vec::new() });
        id
    }

    /// Add a panel to the UI
    pub fn add_panel(&mut self, parent: Option<UINodeId>, panel: UIPanel) -> UINodeId {
        self.insert(parent, UINode::Panel(panel))
    }

    /// Add text to the UI
    pub fn add_text(&mut self, parent: Option<UINodeId>, text: UIText) -> UINodeId {
        self.insert(parent, UINode::Text(text))
    }

    /// Add a button to the UI
    pub fn add_button(&mut self, parent: Option<UINodeId>, button: UIButton) -> UINodeId {
        self.insert(parent, UINode::Button(button))
    }

    /// Add a slider to the UI
    pub fn add_slider(&mut self, parent: Option<UINodeId>, slider: UISlider) -> UINodeId {
        self.insert(parent, UINode::Slider(slider))
    }

    /// Add a toggle to the UI
    pub fn add_toggle(&mut self, parent: Option<UINodeId>, toggle: UIToggle) -> UINodeId {
        self.insert(parent, UINode::Toggle(toggle))
    }

    /// Add a dropdown to the UI
    pub fn add_dropdown(&mut self, parent: Option<UINodeId>, dropdown: UIDropdown) -> UINodeId {
        self.insert(parent, UINode::Dropdown(dropdown))
    }

    /// Remove a UI element and everything beneath it
    pub fn remove_element(&mut self, id: UINodeId) {
        let Some(entry) = self.nodes.remove(&id) else {
            return;
        };

        if let Some(parent) = entry.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|child| *child != id);
        }

        for child in entry.children {
            self.remove_element(child);
        }
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node
    pub fn get_node(&self, id: UINodeId) -> Option<&UINode> {
        self.nodes.get(&id).map(|entry| &entry.node)
    }

    /// Parent of a node
    pub fn parent(&self, id: UINodeId) -> Option<UINodeId> {
        self.nodes.get(&id).and_then(|entry| entry.parent)
    }

    /// Children of a node in insertion order
    pub fn children(&self, id: UINodeId) -> &[UINodeId] {
        self.nodes.get(&id).map_or(&[] as &[UINodeId], |entry| entry.children.as_slice())
    }

    /// Show or hide a node (its subtree follows)
    pub fn set_visible(&mut self, id: UINodeId, visible: bool) {
        if let Some(entry) = self.nodes.get_mut(&id) {
            entry.node.element_mut().visible = visible;
        }
    }

    /// The node's own visibility flag
    pub fn is_visible(&self, id: UINodeId) -> bool {
        self.get_node(id).is_some_and(|node| node.element().visible)
    }

    /// Whether the node and all of its ancestors are visible
    pub fn is_effectively_visible(&self, id: UINodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.nodes.get(&node_id) {
                Some(entry) if entry.node.element().visible => current = entry.parent,
                _ => return false,
            }
        }
        true
    }

    /// Screen bounds of a node
    pub fn bounds(&self, id: UINodeId) -> Option<Bounds> {
        let (width, height) = self.screen_size;
        self.get_node(id)
            .map(|node| UILayout::calculate_bounds(node.element(), width, height))
    }

    /// Get text reference
    pub fn get_text(&self, id: UINodeId) -> Option<&UIText> {
        match self.get_node(id) {
            Some(UINode::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Update text content
    pub fn update_text(&mut self, id: UINodeId, new_text: impl Into<String>) {
        if let Some(UINode::Text(text)) = self.nodes.get_mut(&id).map(|entry| &mut entry.node) {
            text.text = new_text.into();
        }
    }

    /// Get button reference
    pub fn get_button(&self, id: UINodeId) -> Option<&UIButton> {
        match self.get_node(id) {
            Some(UINode::Button(button)) => Some(button),
            _ => None,
        }
    }

    /// Get button mutable reference
    pub fn get_button_mut(&mut self, id: UINodeId) -> Option<&mut UIButton> {
        match self.nodes.get_mut(&id).map(|entry| &mut entry.node) {
            Some(UINode::Button(button)) => Some(button),
            _ => None,
        }
    }

    /// Get slider reference
    pub fn get_slider(&self, id: UINodeId) -> Option<&UISlider> {
        match self.get_node(id) {
            Some(UINode::Slider(slider)) => Some(slider),
            _ => None,
        }
    }

    /// Get toggle reference
    pub fn get_toggle(&self, id: UINodeId) -> Option<&UIToggle> {
        match self.get_node(id) {
            Some(UINode::Toggle(toggle)) => Some(toggle),
            _ => None,
        }
    }

    /// Get dropdown reference
    pub fn get_dropdown(&self, id: UINodeId) -> Option<&UIDropdown> {
        match self.get_node(id) {
            Some(UINode::Dropdown(dropdown)) => Some(dropdown),
            _ => None,
        }
    }

    fn get_slider_mut(&mut self, id: UINodeId) -> Option<&mut UISlider> {
        match self.nodes.get_mut(&id).map(|entry| &mut entry.node) {
            Some(UINode::Slider(slider)) => Some(slider),
            _ => None,
        }
    }

    fn get_toggle_mut(&mut self, id: UINodeId) -> Option<&mut UIToggle> {
        match self.nodes.get_mut(&id).map(|entry| &mut entry.node) {
            Some(UINode::Toggle(toggle)) => Some(toggle),
            _ => None,
        }
    }

    fn get_dropdown_mut(&mut self, id: UINodeId) -> Option<&mut UIDropdown> {
        match self.nodes.get_mut(&id).map(|entry| &mut entry.node) {
            Some(UINode::Dropdown(dropdown)) => Some(dropdown),
            _ => None,
        }
    }

    fn timestamp(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let frame = self.frame_counter as f64;
        frame
    }

    /// Activate a button as if it were clicked
    ///
    /// Disabled or hidden buttons ignore the click. Returns whether a
    /// click event was raised.
    pub fn click_button(&mut self, id: UINodeId) -> bool {
        let clickable = self.get_button(id).is_some_and(|button| button.enabled)
            && self.is_effectively_visible(id);
        if !clickable {
            log::debug!("Ignoring click on {:?}", id);
            return false;
        }

        self.outbox.push(Event::new(EventType::ButtonClicked, id, self.timestamp()));
        true
    }

    /// Move a slider, clamped to its range
    ///
    /// Raises `SliderChanged` when the value actually changes. Non-finite
    /// values are ignored.
    pub fn set_slider_value(&mut self, id: UINodeId, value: f32) -> bool {
        if !value.is_finite() {
            log::warn!("Ignoring non-finite value {value} for slider {id:?}");
            return false;
        }
        let timestamp = self.timestamp();
        let Some(slider) = self.get_slider_mut(id) else {
            return false;
        };

        let clamped = slider.clamp(value);
        #[allow(clippy::float_cmp)]
        let unchanged = slider.value == clamped;
        if unchanged {
            return false;
        }
        slider.value = clamped;

        self.outbox.push(
            Event::new(EventType::SliderChanged, id, timestamp)
                .with_arg("new_value", EventArg::Value(clamped)),
        );
        true
    }

    /// Move a slider without raising an event
    pub fn set_slider_value_without_notify(&mut self, id: UINodeId, value: f32) {
        if !value.is_finite() {
            log::warn!("Ignoring non-finite value {value} for slider {id:?}");
            return;
        }
        if let Some(slider) = self.get_slider_mut(id) {
            slider.value = slider.clamp(value);
        }
    }

    /// Check or uncheck a toggle
    ///
    /// Raises `ToggleChanged` when the state actually changes.
    pub fn set_toggle_value(&mut self, id: UINodeId, value: bool) -> bool {
        let timestamp = self.timestamp();
        let Some(toggle) = self.get_toggle_mut(id) else {
            return false;
        };
        if toggle.value == value {
            return false;
        }
        toggle.value = value;

        self.outbox.push(
            Event::new(EventType::ToggleChanged, id, timestamp)
                .with_arg("new_value", EventArg::Toggled(value)),
        );
        true
    }

    /// Check or uncheck a toggle without raising an event
    pub fn set_toggle_value_without_notify(&mut self, id: UINodeId, value: bool) {
        if let Some(toggle) = self.get_toggle_mut(id) {
            toggle.value = value;
        }
    }

    /// Select one of a dropdown's choices
    ///
    /// Values outside the choice list are rejected. Raises `DropdownChanged`
    /// when the selection actually changes.
    pub fn select_dropdown_value(&mut self, id: UINodeId, value: &str) -> bool {
        let timestamp = self.timestamp();
        let Some(dropdown) = self.get_dropdown_mut(id) else {
            return false;
        };
        if !dropdown.contains(value) {
            log::warn!("{:?} is not a choice of dropdown {:?}", value, dropdown.label);
            return false;
        }
        if dropdown.value == value {
            return false;
        }
        dropdown.value = value.to_string();

        self.outbox.push(
            Event::new(EventType::DropdownChanged, id, timestamp)
                .with_arg("new_value", EventArg::Choice(value.to_string())),
        );
        true
    }

    /// Set a dropdown's displayed value without raising an event
    pub fn set_dropdown_value_without_notify(&mut self, id: UINodeId, value: impl Into<String>) {
        if let Some(dropdown) = self.get_dropdown_mut(id) {
            dropdown.value = value.into();
        }
    }

    /// Replace a dropdown's choices
    pub fn set_dropdown_choices(&mut self, id: UINodeId, choices: impl IntoIterator<Item = String>) {
        if let Some(dropdown) = self.get_dropdown_mut(id) {
            dropdown.choices = choices.into_iter().collect();
        }
    }

    /// Update mouse position
    pub fn update_mouse_position(&mut self, x: f32, y: f32) {
        self.input_processor.update_mouse_position(x, y);
    }

    /// Update mouse button state
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.input_processor.update_mouse_button(button, pressed);
    }

    /// Set screen size
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_size = (width, height);
        self.input_processor.set_screen_size(width, height);
    }

    /// Get screen size
    pub const fn get_screen_size(&self) -> (f32, f32) {
        self.screen_size
    }

    /// Update UI state (call once per frame)
    pub fn update(&mut self, _delta_time: f32) {
        self.frame_counter += 1;
        let timestamp = self.timestamp();

        let mut button_ids: Vec<UINodeId> = self.nodes.iter()
            .filter(|(_, entry)| matches!(entry.node, UINode::Button(_)))
            .map(|(id, _)| *id)
            .collect();
        button_ids.sort_unstable();

        for id in button_ids {
            let visible = self.is_effectively_visible(id);
            if let Some(UINode::Button(button)) = self.nodes.get_mut(&id).map(|entry| &mut entry.node) {
                self.input_processor.process_button(id, button, visible, timestamp, &mut self.outbox);
            }
        }

        // Reset per-frame input flags AFTER processing all buttons
        self.input_processor.reset_frame_flags();
    }

    /// Take all events raised since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.outbox)
    }
}

impl Default for UIManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> (UIManager, UINodeId, UINodeId, UINodeId) {
        let mut ui = UIManager::new();
        let root = ui.add_panel(None, UIPanel::new("root"));
        let container = ui.add_panel(Some(root), UIPanel::new("container"));
        let button = ui.add_button(Some(container), UIButton::new("Back"));
        (ui, root, container, button)
    }

    #[test]
    fn test_tree_links() {
        let (ui, root, container, button) = tree();
        assert_eq!(ui.parent(button), Some(container));
        assert_eq!(ui.children(root), &[container]);
        assert_eq!(ui.node_count(), 3);
    }

    #[test]
    fn test_effective_visibility() {
        let (mut ui, root, container, button) = tree();
        assert!(ui.is_effectively_visible(button));

        ui.set_visible(root, false);
        assert!(ui.is_visible(button));
        assert!(!ui.is_effectively_visible(button));

        ui.set_visible(root, true);
        ui.set_visible(container, false);
        assert!(!ui.is_effectively_visible(button));
        assert!(ui.is_effectively_visible(root));
    }

    #[test]
    fn test_click_requires_visibility() {
        let (mut ui, root, _, button) = tree();

        assert!(ui.click_button(button));
        ui.set_visible(root, false);
        assert!(!ui.click_button(button));

        let events = ui.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].source, button);
        assert!(ui.take_events().is_empty());
    }

    #[test]
    fn test_click_disabled_button() {
        let (mut ui, _, _, button) = tree();
        ui.get_button_mut(button).unwrap().enabled = false;
        assert!(!ui.click_button(button));
    }

    #[test]
    fn test_slider_clamps_and_notifies_on_change() {
        let mut ui = UIManager::new();
        let slider = ui.add_slider(None, UISlider::new("Master Volume", 0.0, 100.0).with_value(75.0));

        assert!(ui.set_slider_value(slider, 150.0));
        assert_eq!(ui.get_slider(slider).unwrap().value, 100.0);
        assert!(!ui.set_slider_value(slider, 120.0));

        ui.set_slider_value_without_notify(slider, 10.0);
        assert_eq!(ui.get_slider(slider).unwrap().value, 10.0);

        let events = ui.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].get_value(), Some(100.0));
    }

    #[test]
    fn test_slider_ignores_non_finite_values() {
        let mut ui = UIManager::new();
        let slider = ui.add_slider(None, UISlider::new("Music Volume", 0.0, 100.0).with_value(60.0));

        assert!(!ui.set_slider_value(slider, f32::NAN));
        assert!(!ui.set_slider_value(slider, f32::INFINITY));
        ui.set_slider_value_without_notify(slider, f32::NEG_INFINITY);

        assert_eq!(ui.get_slider(slider).unwrap().value, 60.0);
        assert!(ui.take_events().is_empty());
    }

    #[test]
    fn test_toggle_notifies_on_change() {
        let mut ui = UIManager::new();
        let toggle = ui.add_toggle(None, UIToggle::new("V-Sync"));

        assert!(!ui.set_toggle_value(toggle, false));
        assert!(ui.set_toggle_value(toggle, true));
        ui.set_toggle_value_without_notify(toggle, false);

        let events = ui.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].get_toggled(), Some(true));
        assert!(!ui.get_toggle(toggle).unwrap().value);
    }

    #[test]
    fn test_dropdown_only_selects_choices() {
        let mut ui = UIManager::new();
        let dropdown = ui.add_dropdown(None, UIDropdown::new("Resolution"));
        ui.set_dropdown_value_without_notify(dropdown, "1920 x 1080");
        ui.set_dropdown_choices(dropdown, ["640 x 480".to_string()]);
        ui.set_dropdown_choices(dropdown, ["1280 x 720".to_string(), "1920 x 1080".to_string()]);
        assert_eq!(ui.get_dropdown(dropdown).unwrap().choices.len(), 2);

        assert!(!ui.select_dropdown_value(dropdown, "640 x 480"));
        assert!(!ui.select_dropdown_value(dropdown, "1920 x 1080"));
        assert!(ui.select_dropdown_value(dropdown, "1280 x 720"));

        let events = ui.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].get_choice(), Some("1280 x 720"));
    }

    #[test]
    fn test_remove_subtree() {
        let (mut ui, root, container, button) = tree();
        ui.remove_element(container);

        assert!(ui.get_button(button).is_none());
        assert!(ui.children(root).is_empty());
        assert_eq!(ui.node_count(), 1);
    }

    #[test]
    fn test_mouse_click_through_update() {
        let mut ui = UIManager::new();
        let button = ui.add_button(
            None,
            UIButton::new("Resume").with_element(UIElement::centered((-50.0, -20.0), (100.0, 40.0))),
        );

        let (min_x, min_y, max_x, max_y) = ui.bounds(button).unwrap();
        ui.update_mouse_position((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
        ui.update(0.016);
        ui.update_mouse_button(MouseButton::Left, true);
        ui.update(0.016);
        ui.update_mouse_button(MouseButton::Left, false);
        ui.update(0.016);

        let clicks: Vec<_> = ui
            .take_events()
            .into_iter()
            .filter(|event| event.event_type == EventType::ButtonClicked)
            .collect();
        assert_eq!(clicks.len(), 1);
        assert_eq!(clicks[0].source, button);
    }
}
