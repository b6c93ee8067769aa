//! Toggle widget - a labelled checkbox

use super::core::UIElement;

/// UI toggle component
#[derive(Debug, Clone, Default)]
pub struct UIToggle {
    /// Base element properties
    pub element: UIElement,

    /// Label shown beside the checkbox
    pub label: String,

    /// Checked state
    pub value: bool,
}

impl UIToggle {
    /// Create an unchecked toggle
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}
