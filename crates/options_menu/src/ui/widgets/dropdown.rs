//! Dropdown widget - pick one string from a list

use super::core::UIElement;

/// UI dropdown component
#[derive(Debug, Clone, Default)]
pub struct UIDropdown {
    /// Base element properties
    pub element: UIElement,

    /// Label shown beside the field
    pub label: String,

    /// Selectable entries
    pub choices: Vec<String>,

    /// Displayed value
    ///
    /// May hold a value outside `choices` when set programmatically.
    pub value: String,
}

impl UIDropdown {
    /// Create an empty dropdown
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Whether `value` is one of the choices
    pub fn contains(&self, value: &str) -> bool {
        self.choices.iter().any(|choice| choice == value)
    }
}
