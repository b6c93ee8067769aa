//! UI layout calculations
//!
//! Converts UI element data to screen-space coordinates.

use crate::foundation::math::{Bounds, Vec2};
use crate::ui::widgets::UIElement;

/// Layout calculator for UI elements
pub struct UILayout;

impl UILayout {
    /// Calculate screen position from element properties
    ///
    /// # Arguments
    /// * `element` - UI element with position and anchor
    /// * `screen_width` - Window width in pixels
    /// * `screen_height` - Window height in pixels
    ///
    /// # Returns
    /// Screen position in pixels (top-left origin)
    pub fn calculate_position(
        element: &UIElement,
        screen_width: f32,
        screen_height: f32,
    ) -> Vec2 {
        let (anchor_x, anchor_y) = element.anchor.to_normalized();

        // Start from anchor point
        let anchor_screen_x = anchor_x * screen_width;
        let anchor_screen_y = anchor_y * screen_height;

        // Add element offset
        Vec2::new(
            anchor_screen_x + element.position.0,
            anchor_screen_y + element.position.1,
        )
    }

    /// Calculate bounding box for an element
    ///
    /// # Returns
    /// (min_x, min_y, max_x, max_y) in screen pixels
    pub fn calculate_bounds(
        element: &UIElement,
        screen_width: f32,
        screen_height: f32,
    ) -> Bounds {
        let pos = Self::calculate_position(element, screen_width, screen_height);

        (pos.x, pos.y, pos.x + element.size.0, pos.y + element.size.1)
    }

    /// Center point of an element's bounds
    pub fn calculate_center(
        element: &UIElement,
        screen_width: f32,
        screen_height: f32,
    ) -> Vec2 {
        let (min_x, min_y, max_x, max_y) = Self::calculate_bounds(element, screen_width, screen_height);
        Vec2::new((min_x + max_x) * 0.5, (min_y + max_y) * 0.5)
    }

    /// Positions for a vertical stack of `count` items centered on the screen
    ///
    /// Each entry is an offset from [`crate::ui::Anchor::Center`] for an item
    /// of `item_size`, separated by `spacing` pixels.
    pub fn vertical_stack(count: usize, item_size: (f32, f32), spacing: f32) -> Vec<(f32, f32)> {
        #[allow(clippy::cast_precision_loss)]
        let total = count as f32 * item_size.1 + count.saturating_sub(1) as f32 * spacing;
        let x = -item_size.0 * 0.5;
        let top = -total * 0.5;

        (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let y = top + i as f32 * (item_size.1 + spacing);
                (x, y)
            })
            .collect()
    }
}
