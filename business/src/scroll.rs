//! Bottom-of-scroll detection for the infinite-scrolling table.

use std::any::Any;

use roster_states::State;

/// Pixels of slack when deciding the viewport sits at the bottom. The
/// legacy exact-equality check breaks under sub-pixel scroll positions and
/// display zoom; any position within this distance counts as bottom.
pub const BOTTOM_SLACK: f32 = 4.0;

/// Geometry of one observed frame of the scrolled table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the viewport into the content.
    pub offset: f32,
    /// Height of the visible viewport.
    pub viewport: f32,
    /// Total height of the scrollable content.
    pub content: f32,
}

impl ScrollMetrics {
    /// Whether the viewport bottom is within `slack` pixels of the content
    /// bottom. Content that does not fill the viewport counts as bottom, so
    /// short collections keep loading until they do.
    pub fn bottom_reached(&self, slack: f32) -> bool {
        self.content <= self.viewport || self.offset + self.viewport + slack >= self.content
    }
}

/// Edge-triggered bottom-of-scroll detector.
///
/// [`observe`](Self::observe) reports `true` when the viewport newly arrives
/// at the bottom, or when the content height changed while already sitting
/// there (a fetched page landed but still does not fill the viewport, and
/// the very first frame with an empty collection). A failed fetch changes
/// neither, so the monitor stays quiet instead of re-requesting every frame.
#[derive(Debug, Default)]
pub struct ScrollMonitor {
    was_at_bottom: bool,
    last_content: f32,
}

impl ScrollMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, metrics: ScrollMetrics) -> bool {
        let at_bottom = metrics.bottom_reached(BOTTOM_SLACK);
        let content_changed = metrics.content != self.last_content;
        let trigger = at_bottom && (!self.was_at_bottom || content_changed);

        self.was_at_bottom = at_bottom;
        self.last_content = metrics.content;
        trigger
    }
}

impl State for ScrollMonitor {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
