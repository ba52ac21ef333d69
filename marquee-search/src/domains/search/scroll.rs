//! Near-end detection for the suggestion list.
//!
//! The state machine only understands [`Message::LoadMore`]; this is the
//! policy a front end uses to decide when to send it.
//!
//! [`Message::LoadMore`]: super::messages::Message::LoadMore

/// Default distance from the bottom, in pixels, that counts as "near the end".
pub const DEFAULT_SCROLL_THRESHOLD_PX: f32 = 20.0;

/// Geometry of the scrollable suggestion list at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollViewport {
    pub scroll_top: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollViewport {
    pub fn new(scroll_top: f32, viewport_height: f32, content_height: f32) -> Self {
        Self {
            scroll_top,
            viewport_height,
            content_height,
        }
    }

    /// `true` once the bottom edge of the viewport is within `threshold`
    /// pixels of the end of the content. Content shorter than the viewport
    /// is always near the end.
    pub fn is_near_end(&self, threshold: f32) -> bool {
        self.scroll_top + self.viewport_height
            >= self.content_height - threshold.max(0.0)
    }
}
