//! Math utilities and types
//!
//! Screen-space math types used by the UI layout and input code.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Axis-aligned screen rectangle as (min_x, min_y, max_x, max_y)
pub type Bounds = (f32, f32, f32, f32);
