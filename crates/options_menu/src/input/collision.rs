//! Collision detection for input processing
//!
//! Hit testing for UI elements. This is input system responsibility -
//! determining what the user clicked on.

use crate::ui::widgets::{UIElement, UILayout};

/// Check if a point is inside a rectangular UI element's bounds
///
/// # Arguments
/// * `element` - UI element with position, size, and anchor
/// * `screen_width` - Window width in pixels
/// * `screen_height` - Window height in pixels
/// * `point_x` - X coordinate of the point in screen pixels
/// * `point_y` - Y coordinate of the point in screen pixels
///
/// # Returns
/// `true` if the point is inside the element's bounds
pub fn point_in_ui_element(
    element: &UIElement,
    screen_width: f32,
    screen_height: f32,
    point_x: f32,
    point_y: f32,
) -> bool {
    let (min_x, min_y, max_x, max_y) = UILayout::calculate_bounds(element, screen_width, screen_height);

    point_in_rect(point_x, point_y, min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Check if a point is inside a rectangular region
///
/// # Arguments
/// * `point_x` - X coordinate of the point
/// * `point_y` - Y coordinate of the point
/// * `rect_x` - X coordinate of rectangle's top-left corner
/// * `rect_y` - Y coordinate of rectangle's top-left corner
/// * `rect_width` - Width of the rectangle
/// * `rect_height` - Height of the rectangle
///
/// # Returns
/// `true` if the point is inside the rectangle
pub fn point_in_rect(
    point_x: f32,
    point_y: f32,
    rect_x: f32,
    rect_y: f32,
    rect_width: f32,
    rect_height: f32,
) -> bool {
    point_x >= rect_x &&
    point_x <= rect_x + rect_width &&
    point_y >= rect_y &&
    point_y <= rect_y + rect_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::Anchor;

    #[test]
    fn test_point_in_rect() {
        // Point inside
        assert!(point_in_rect(150.0, 150.0, 100.0, 100.0, 200.0, 100.0));

        // Point on edge
        assert!(point_in_rect(100.0, 100.0, 100.0, 100.0, 200.0, 100.0));
        assert!(point_in_rect(300.0, 200.0, 100.0, 100.0, 200.0, 100.0));

        // Point outside
        assert!(!point_in_rect(50.0, 50.0, 100.0, 100.0, 200.0, 100.0));
        assert!(!point_in_rect(350.0, 250.0, 100.0, 100.0, 200.0, 100.0));
    }

    #[test]
    fn test_point_in_ui_element() {
        let element = UIElement {
            position: (100.0, 100.0),
            size: (200.0, 100.0),
            anchor: Anchor::TopLeft,
            visible: true,
            z_order: 0,
        };

        assert!(point_in_ui_element(&element, 800.0, 600.0, 150.0, 150.0));
        assert!(point_in_ui_element(&element, 800.0, 600.0, 100.0, 100.0));
        assert!(!point_in_ui_element(&element, 800.0, 600.0, 50.0, 50.0));
        assert!(!point_in_ui_element(&element, 800.0, 600.0, 350.0, 250.0));
    }

    #[test]
    fn test_point_in_ui_element_with_center_anchor() {
        let element = UIElement::centered((0.0, 0.0), (100.0, 50.0));

        // Element starts at the screen center (400, 300) and spans 100x50
        assert!(point_in_ui_element(&element, 800.0, 600.0, 450.0, 325.0));
        assert!(!point_in_ui_element(&element, 800.0, 600.0, 100.0, 100.0));
    }
}
