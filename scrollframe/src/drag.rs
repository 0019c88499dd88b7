use log::debug;

use crate::geometry::{scroll_ratio, ThumbGeometry};
use crate::host::PointerCapture;
use crate::types::{Axis, Cursor};

/// An active thumb drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub axis: Axis,
    /// Pointer position when the drag began.
    pub origin_x: f64,
    pub origin_y: f64,
    /// Scroll position when the drag began.
    pub start_left: f64,
    pub start_top: f64,
}

impl DragSession {
    /// Scroll position along the session axis when the drag began.
    pub fn start_position(&self) -> f64 {
        self.axis.pick(self.start_left, self.start_top)
    }

    /// Pointer travel along the session axis.
    pub fn delta(&self, x: f64, y: f64) -> f64 {
        self.axis.pick(x - self.origin_x, y - self.origin_y)
    }
}

/// Maps pointer travel on a thumb to scroll travel of the content.
///
/// At most one session exists. A `begin` while one is active is rejected, and
/// an `end` without one does nothing.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session and take the global pointer.
    ///
    /// Returns false if a session was already active.
    pub fn begin<P>(
        &mut self,
        axis: Axis,
        pointer_x: f64,
        pointer_y: f64,
        scroll_left: f64,
        scroll_top: f64,
        pointer: &mut P,
    ) -> bool
    where
        P: PointerCapture + ?Sized,
    {
        if let Some(active) = &self.session {
            debug!(
                "drag begin on {} rejected: {} drag already active",
                axis.name(),
                active.axis.name()
            );
            return false;
        }

        debug!("drag begin on {} at ({pointer_x}, {pointer_y})", axis.name());
        self.session = Some(DragSession {
            axis,
            origin_x: pointer_x,
            origin_y: pointer_y,
            start_left: scroll_left,
            start_top: scroll_top,
        });
        pointer.capture_pointer();
        pointer.set_cursor(Cursor::Grabbing);
        pointer.set_text_selection(false);
        true
    }

    /// Scroll position for the current pointer location.
    ///
    /// `geometry` is the thumb of the session axis and `content_range` the
    /// scroll range along it. The value is not clamped; the scroll region
    /// clamps on assignment. `None` without a session or when the thumb has
    /// no room to move.
    pub fn pointer_move(
        &self,
        pointer_x: f64,
        pointer_y: f64,
        geometry: ThumbGeometry,
        content_range: f64,
    ) -> Option<f64> {
        let session = self.session.as_ref()?;
        let ratio = scroll_ratio(content_range, geometry.track, geometry.size)?;
        Some(session.start_position() + session.delta(pointer_x, pointer_y) * ratio)
    }

    /// Finish the session and give the pointer back.
    pub fn end<P: PointerCapture + ?Sized>(&mut self, pointer: &mut P) -> Option<DragSession> {
        let session = self.session.take()?;
        debug!("drag end on {}", session.axis.name());
        pointer.release_pointer();
        pointer.set_cursor(Cursor::Default);
        pointer.set_text_selection(true);
        Some(session)
    }
}
