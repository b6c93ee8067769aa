//! Text widget - labels and headers

use super::core::UIElement;

/// UI text label component
#[derive(Debug, Clone, Default)]
pub struct UIText {
    /// Base element properties
    pub element: UIElement,

    /// Text content to display
    pub text: String,
}

impl UIText {
    /// Create a label
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}
