//! Panel widget - named containers grouping other widgets

use super::core::UIElement;

/// UI panel component - a container other nodes are parented to
#[derive(Debug, Clone, Default)]
pub struct UIPanel {
    /// Base element properties
    pub element: UIElement,

    /// Container name, for lookups and logging
    pub name: String,
}

impl UIPanel {
    /// Create a named full-screen container
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            element: UIElement::default(),
            name: name.into(),
        }
    }
}
