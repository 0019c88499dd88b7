use crate::types::Axis;

/// The native scrollable area the widget decorates.
///
/// Implementations own the real scroll position. Assignments through
/// `set_scroll_left`/`set_scroll_top` must be clamped to
/// `[0, scroll size - client size]` the way a platform scroll container clamps
/// them.
pub trait ScrollRegion {
    fn scroll_left(&self) -> f64;
    fn scroll_top(&self) -> f64;
    fn scroll_width(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn client_width(&self) -> f64;
    fn client_height(&self) -> f64;

    fn set_scroll_left(&mut self, value: f64);
    fn set_scroll_top(&mut self, value: f64);

    /// Report, once, that the scroll position changed since the last call.
    ///
    /// This stands in for the platform's scroll event. Regions whose host
    /// delivers [`Event::Scroll`](crate::event::Event::Scroll) itself should
    /// always return false.
    fn take_scroll_notification(&mut self) -> bool;

    fn scroll_position(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.scroll_left(),
            Axis::Y => self.scroll_top(),
        }
    }

    fn set_scroll_position(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.set_scroll_left(value),
            Axis::Y => self.set_scroll_top(value),
        }
    }
}

/// An in-memory scroll container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRegion {
    scroll_left: f64,
    scroll_top: f64,
    content_width: f64,
    content_height: f64,
    viewport_width: f64,
    viewport_height: f64,
    scrolled: bool,
}

impl MemoryRegion {
    pub fn new(
        viewport_width: f64,
        viewport_height: f64,
        content_width: f64,
        content_height: f64,
    ) -> Self {
        Self {
            viewport_width,
            viewport_height,
            content_width,
            content_height,
            ..Default::default()
        }
    }

    /// Change the visible box. Positions that fall out of range are pulled
    /// back, which counts as a scroll.
    pub fn resize_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.reclamp();
    }

    /// Change the content extent, e.g. after the content mutated.
    pub fn resize_content(&mut self, width: f64, height: f64) {
        self.content_width = width;
        self.content_height = height;
        self.reclamp();
    }

    /// Scroll by a delta, as a wheel would.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.set_scroll_left(self.scroll_left + dx);
        self.set_scroll_top(self.scroll_top + dy);
    }

    fn max_left(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    fn max_top(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    fn reclamp(&mut self) {
        let left = self.scroll_left;
        let top = self.scroll_top;
        self.set_scroll_left(left);
        self.set_scroll_top(top);
    }

    fn assign(current: &mut f64, value: f64, max: f64, scrolled: &mut bool) {
        if value.is_nan() {
            return;
        }
        let value = value.clamp(0.0, max);
        if value != *current {
            *current = value;
            *scrolled = true;
        }
    }
}

impl ScrollRegion for MemoryRegion {
    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn scroll_width(&self) -> f64 {
        self.content_width.max(self.viewport_width)
    }

    fn scroll_height(&self) -> f64 {
        self.content_height.max(self.viewport_height)
    }

    fn client_width(&self) -> f64 {
        self.viewport_width
    }

    fn client_height(&self) -> f64 {
        self.viewport_height
    }

    fn set_scroll_left(&mut self, value: f64) {
        let max = self.max_left();
        Self::assign(&mut self.scroll_left, value, max, &mut self.scrolled);
    }

    fn set_scroll_top(&mut self, value: f64) {
        let max = self.max_top();
        Self::assign(&mut self.scroll_top, value, max, &mut self.scrolled);
    }

    fn take_scroll_notification(&mut self) -> bool {
        std::mem::take(&mut self.scrolled)
    }
}
