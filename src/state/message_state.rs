//! Overlay message state

use serde::{Deserialize, Serialize};

/// Default font size when the request omits one
pub const DEFAULT_FONT_SIZE_PX: u32 = 48;
/// Allowed font size range in pixels
pub const MIN_FONT_SIZE_PX: i64 = 12;
pub const MAX_FONT_SIZE_PX: i64 = 200;

/// User-authored overlay message shown on top of the clock/timer display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageState {
    pub text: String,
    pub font_size_px: u32,
    pub visible: bool,
}

impl MessageState {
    /// Create a hidden, empty message
    pub fn new() -> Self {
        Self {
            text: String::new(),
            font_size_px: DEFAULT_FONT_SIZE_PX,
            visible: false,
        }
    }

    /// Store and show a message; blank text is a silent no-op
    ///
    /// Returns whether the state changed. Font size defaults to
    /// [`DEFAULT_FONT_SIZE_PX`] and clamps to the allowed range.
    pub fn show(&mut self, text: &str, font_size_px: Option<i64>) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.text = trimmed.to_string();
        self.font_size_px = font_size_px
            .map(|px| px.clamp(MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX) as u32)
            .unwrap_or(DEFAULT_FONT_SIZE_PX);
        self.visible = true;
        true
    }

    /// Hide the overlay, retaining the last text and size
    pub fn clear(&mut self) {
        self.visible = false;
    }
}

impl Default for MessageState {
    fn default() -> Self {
        Self::new()
    }
}
