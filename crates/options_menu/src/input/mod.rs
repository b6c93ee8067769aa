//! Input module
//!
//! Hit testing used by UI input processing.

pub mod collision;
