//! Slider widget - a labelled value on a fixed range

use super::core::UIElement;

/// UI slider component
#[derive(Debug, Clone)]
pub struct UISlider {
    /// Base element properties
    pub element: UIElement,

    /// Label shown beside the slider
    pub label: String,

    /// Lowest value
    pub min: f32,

    /// Highest value
    pub max: f32,

    /// Current value, always within `[min, max]`
    pub value: f32,

    /// Whether a numeric input field is shown next to the track
    pub show_input_field: bool,
}

impl UISlider {
    /// Create a slider on `[min, max]` starting at `min`
    pub fn new(label: impl Into<String>, min: f32, max: f32) -> Self {
        Self {
            element: UIElement::default(),
            label: label.into(),
            min,
            max,
            value: min,
            show_input_field: false,
        }
    }

    /// Set the starting value
    #[must_use]
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = self.clamp(value);
        self
    }

    /// Show the numeric input field
    #[must_use]
    pub const fn with_input_field(mut self) -> Self {
        self.show_input_field = true;
        self
    }

    /// Clamp a value into the slider range
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}
