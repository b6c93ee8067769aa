//! UI Input Processing
//!
//! Turns raw mouse state into button state changes and UI events.

use crate::events::{Event, EventArg, EventType};
use crate::input::collision;
use crate::ui::widgets::{ButtonState, UIButton};
use crate::ui::UINodeId;

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// UI input processor
///
/// Handles mouse input and button state management. A click is a left
/// press and release that both land on the same button.
pub struct UIInputProcessor {
    /// Current mouse position in screen coordinates
    mouse_x: f32,
    mouse_y: f32,

    /// Mouse button states
    left_button_down: bool,
    left_button_released_this_frame: bool,

    /// Screen dimensions for coordinate calculations
    screen_width: f32,
    screen_height: f32,
}

impl UIInputProcessor {
    /// Create a new UI input processor
    pub const fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            mouse_x: 0.0,
            mouse_y: 0.0,
            left_button_down: false,
            left_button_released_this_frame: false,
            screen_width,
            screen_height,
        }
    }

    /// Update screen dimensions (call when window resizes)
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Update mouse position
    pub fn update_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Update mouse button state
    pub fn update_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Left {
            let was_down = self.left_button_down;
            self.left_button_down = pressed;

            if was_down && !pressed {
                self.left_button_released_this_frame = true;
            }
        }
    }

    /// Reset per-frame input flags (call after processing all buttons)
    pub fn reset_frame_flags(&mut self) {
        self.left_button_released_this_frame = false;
    }

    /// Process input for a button, updating its state
    ///
    /// `visible` is the button's effective visibility (including ancestors).
    /// Click and hover events are appended to `out`.
    pub fn process_button(
        &self,
        id: UINodeId,
        button: &mut UIButton,
        visible: bool,
        timestamp: f64,
        out: &mut Vec<Event>,
    ) {
        if !button.enabled || !visible {
            button.state = ButtonState::Disabled;
            return;
        }

        let is_hovered = collision::point_in_ui_element(
            &button.element,
            self.screen_width,
            self.screen_height,
            self.mouse_x,
            self.mouse_y,
        );

        let old_state = button.state;

        button.state = if !is_hovered {
            ButtonState::Normal
        } else if self.left_button_down {
            ButtonState::Pressed
        } else {
            ButtonState::Hovered
        };

        // Fire click event if mouse was just released over a pressed button
        if button.state == ButtonState::Hovered
            && old_state == ButtonState::Pressed
            && self.left_button_released_this_frame
        {
            out.push(Event::new(EventType::ButtonClicked, id, timestamp));
            return;
        }

        let was_hovered = matches!(old_state, ButtonState::Hovered | ButtonState::Pressed);
        let now_hovered = button.state != ButtonState::Normal;
        if was_hovered != now_hovered {
            out.push(
                Event::new(EventType::ButtonHoverChanged, id, timestamp)
                    .with_arg("hovered", EventArg::Hovered(now_hovered)),
            );
        }
    }

    /// Get current mouse position
    pub const fn mouse_position(&self) -> (f32, f32) {
        (self.mouse_x, self.mouse_y)
    }
}
