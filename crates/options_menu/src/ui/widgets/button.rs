//! Button widget - interactive clickable buttons

use super::core::UIElement;

/// Button state for visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Normal resting state
    Normal,
    /// Mouse is hovering over button
    Hovered,
    /// Button is being pressed
    Pressed,
    /// Button is disabled (non-interactive)
    Disabled,
}

/// UI button component
#[derive(Debug, Clone)]
pub struct UIButton {
    /// Base element properties
    pub element: UIElement,

    /// Button label text
    pub text: String,

    /// Hover tooltip
    pub tooltip: Option<String>,

    /// Current button state
    pub state: ButtonState,

    /// Whether the button is enabled
    pub enabled: bool,
}

impl UIButton {
    /// Create a button with a label
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Attach a tooltip
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Place the button
    #[must_use]
    pub const fn with_element(mut self, element: UIElement) -> Self {
        self.element = element;
        self
    }
}

impl Default for UIButton {
    fn default() -> Self {
        Self {
            element: UIElement::default(),
            text: String::new(),
            tooltip: None,
            state: ButtonState::Normal,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_button_is_clickable() {
        let button = UIButton::new("Accept Changes").with_tooltip("Apply the changes made to video settings.");

        assert_eq!(button.text, "Accept Changes");
        assert_eq!(button.tooltip.as_deref(), Some("Apply the changes made to video settings."));
        assert_eq!(button.state, ButtonState::Normal);
        assert!(button.enabled);
    }
}
