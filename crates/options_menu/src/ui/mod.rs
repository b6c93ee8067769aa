//! UI System Module
//!
//! Retained-mode widget tree used by the options menu.
//!
//! Architecture:
//! - UIManager: Central UI system managing the node tree, visibility, input and events
//! - widgets/: UI widget definitions (Panel, Text, Button, Slider, Toggle, Dropdown)
//! - input/: UI input processing

pub mod manager;
pub mod widgets;
pub mod input;

pub use manager::{UIManager, UINode};

// Re-export widgets
pub use widgets::{
    UIElement, UIPanel, UIText, UIButton, ButtonState,
    UISlider, UIToggle, UIDropdown, Anchor, UILayout,
};

// Re-export input types
pub use input::{UIInputProcessor, MouseButton};

/// Unique identifier for UI elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UINodeId(pub u64);
