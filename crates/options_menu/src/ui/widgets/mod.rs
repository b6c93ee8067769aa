//! UI widgets module
//!
//! Contains all UI widget types (panels, buttons, text, value controls)

pub mod core;
pub mod panel;
pub mod text;
pub mod button;
pub mod slider;
pub mod toggle;
pub mod dropdown;
pub mod layout;

// Re-export core types
pub use core::{Anchor, UIElement};

// Re-export widget types
pub use panel::UIPanel;
pub use text::UIText;
pub use button::{UIButton, ButtonState};
pub use slider::UISlider;
pub use toggle::UIToggle;
pub use dropdown::UIDropdown;
pub use layout::UILayout;
