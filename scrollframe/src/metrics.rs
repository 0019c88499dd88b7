use crate::region::ScrollRegion;
use crate::types::Axis;

/// Snapshot of a scrollable region.
///
/// `left` and `top` are the scroll positions as fractions of the scroll range,
/// in `[0, 1]`, and `0` when there is nothing to scroll.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub left: f64,
    pub top: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Read the current values off a region.
    pub fn measure<R: ScrollRegion + ?Sized>(region: &R) -> Self {
        let scroll_left = non_negative(region.scroll_left());
        let scroll_top = non_negative(region.scroll_top());
        let scroll_width = non_negative(region.scroll_width());
        let scroll_height = non_negative(region.scroll_height());
        let client_width = non_negative(region.client_width());
        let client_height = non_negative(region.client_height());

        Self {
            left: fraction(scroll_left, scroll_width, client_width),
            top: fraction(scroll_top, scroll_height, client_height),
            scroll_left,
            scroll_top,
            scroll_width,
            scroll_height,
            client_width,
            client_height,
        }
    }

    /// The values along a single axis.
    pub fn axis(&self, axis: Axis) -> AxisMetrics {
        match axis {
            Axis::X => AxisMetrics {
                scroll: self.scroll_left,
                content: self.scroll_width,
                viewport: self.client_width,
            },
            Axis::Y => AxisMetrics {
                scroll: self.scroll_top,
                content: self.scroll_height,
                viewport: self.client_height,
            },
        }
    }

    /// Scroll fraction along an axis.
    pub fn fraction(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }
}

/// One axis of a [`ScrollMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisMetrics {
    pub scroll: f64,
    pub content: f64,
    pub viewport: f64,
}

impl AxisMetrics {
    /// Maximum scroll position; zero when the content fits.
    pub fn range(&self) -> f64 {
        (self.content - self.viewport).max(0.0)
    }

    pub fn has_overflow(&self) -> bool {
        self.content > self.viewport
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

fn fraction(scroll: f64, content: f64, viewport: f64) -> f64 {
    let range = content - viewport;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll / range).clamp(0.0, 1.0)
}
