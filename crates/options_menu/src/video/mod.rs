//! Video output seam
//!
//! The options menu applies display changes through [`VideoOutput`]; the
//! window/swapchain owner implements it. [`DisplayState`] records what was
//! applied and is what the demo and tests run against.

/// How the game window occupies the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FullScreenMode {
    /// Borderless window covering the display
    FullScreenWindow,
    /// Regular decorated window
    #[default]
    Windowed,
}

impl FullScreenMode {
    /// Mode for a fullscreen flag
    pub const fn from_fullscreen(fullscreen: bool) -> Self {
        if fullscreen {
            Self::FullScreenWindow
        } else {
            Self::Windowed
        }
    }
}

/// Display and post-processing controls used by the video panel
pub trait VideoOutput {
    /// Change output resolution and window mode
    fn set_resolution(&mut self, width: u32, height: u32, mode: FullScreenMode);

    /// Number of vertical blanks to wait per frame (0 disables vsync)
    fn set_vsync_count(&mut self, count: u32);

    /// Enable the depth-of-field post effect
    ///
    /// Returns false when the post-processing profile has no depth-of-field
    /// effect to toggle.
    fn set_depth_of_field(&mut self, active: bool) -> bool;
}

/// In-memory display state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Current width in pixels
    pub width: u32,
    /// Current height in pixels
    pub height: u32,
    /// Current window mode
    pub mode: FullScreenMode,
    /// Current vsync count
    pub vsync_count: u32,
    /// Depth of field state, `None` when the profile lacks the effect
    pub depth_of_field: Option<bool>,
    /// Number of resolution changes applied
    pub resolution_changes: u32,
}

impl DisplayState {
    /// Windowed 1920x1080 with vsync and depth of field
    pub fn new() -> Self {
        Self {
            width: 1920,
            height: 1080,
            mode: FullScreenMode::Windowed,
            vsync_count: 1,
            depth_of_field: Some(true),
            resolution_changes: 0,
        }
    }

    /// Display whose post profile has no depth-of-field effect
    pub fn without_depth_of_field() -> Self {
        Self {
            depth_of_field: None,
            ..Self::new()
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoOutput for DisplayState {
    fn set_resolution(&mut self, width: u32, height: u32, mode: FullScreenMode) {
        log::info!("Display -> {}x{} {:?}", width, height, mode);
        self.width = width;
        self.height = height;
        self.mode = mode;
        self.resolution_changes += 1;
    }

    fn set_vsync_count(&mut self, count: u32) {
        self.vsync_count = count;
    }

    fn set_depth_of_field(&mut self, active: bool) -> bool {
        match self.depth_of_field.as_mut() {
            Some(state) => {
                *state = active;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_changes() {
        let mut display = DisplayState::new();
        display.set_resolution(2560, 1440, FullScreenMode::from_fullscreen(true));
        display.set_vsync_count(0);

        assert_eq!((display.width, display.height), (2560, 1440));
        assert_eq!(display.mode, FullScreenMode::FullScreenWindow);
        assert_eq!(display.vsync_count, 0);
        assert_eq!(display.resolution_changes, 1);
    }

    #[test]
    fn test_missing_depth_of_field() {
        let mut display = DisplayState::without_depth_of_field();
        assert!(!display.set_depth_of_field(false));
        assert_eq!(display.depth_of_field, None);

        let mut display = DisplayState::new();
        assert!(display.set_depth_of_field(false));
        assert_eq!(display.depth_of_field, Some(false));
    }
}
