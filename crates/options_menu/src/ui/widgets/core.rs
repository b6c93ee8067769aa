//! Core UI widget primitives
//!
//! Shared types and structures used by all UI widgets.

/// Anchor point for UI positioning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Top-left corner (0, 0) in screen space
    TopLeft,
    /// Top-center
    TopCenter,
    /// Top-right corner
    TopRight,
    /// Middle-left
    MiddleLeft,
    /// Center of screen
    Center,
    /// Middle-right
    MiddleRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-center
    BottomCenter,
    /// Bottom-right corner
    BottomRight,
}

impl Anchor {
    /// Get the normalized anchor position (0.0 to 1.0)
    pub const fn to_normalized(self) -> (f32, f32) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::TopCenter => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::MiddleLeft => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::MiddleRight => (1.0, 0.5),
            Self::BottomLeft => (0.0, 1.0),
            Self::BottomCenter => (0.5, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }
}

/// Base UI element properties
#[derive(Debug, Clone, PartialEq)]
pub struct UIElement {
    /// Position in screen space (pixels from anchor point)
    pub position: (f32, f32),

    /// Size in pixels (width, height)
    pub size: (f32, f32),

    /// Anchor point for positioning
    pub anchor: Anchor,

    /// Whether this element is visible (ancestors may still hide it)
    pub visible: bool,

    /// Z-order for layering (higher = on top)
    pub z_order: i32,
}

impl UIElement {
    /// Element anchored to the screen center at an offset
    pub const fn centered(position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            position,
            size,
            anchor: Anchor::Center,
            visible: true,
            z_order: 0,
        }
    }
}

impl Default for UIElement {
    fn default() -> Self {
        Self {
            position: (0.0, 0.0),
            size: (100.0, 50.0),
            anchor: Anchor::TopLeft,
            visible: true,
            z_order: 0,
        }
    }
}
