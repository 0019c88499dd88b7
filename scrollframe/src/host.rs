//! Capabilities the widget borrows from its host.

use crate::timer::Scheduler;
use crate::types::Cursor;

/// Global pointer routing for drags.
///
/// While captured, the host must deliver every pointer move and pointer up to
/// the widget, wherever on screen they happen.
pub trait PointerCapture {
    fn capture_pointer(&mut self);
    fn release_pointer(&mut self);
    fn set_cursor(&mut self, cursor: Cursor);
    /// Enable or suppress text selection (and similar default gestures).
    fn set_text_selection(&mut self, enabled: bool);
}

/// Which box a resize notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeTarget {
    /// The outer widget box.
    Container,
    /// The scrollable view inside it.
    View,
}

/// Size-change notifications.
///
/// An observed target that changes size must be reported with
/// [`Event::Resize`](crate::event::Event::Resize). A host without such a
/// primitive can implement both methods as no-ops; the widget then only
/// updates on scroll.
pub trait ResizeObserver {
    fn observe(&mut self, target: ResizeTarget);
    fn disconnect(&mut self);
}

/// Everything the widget needs from its environment.
pub trait Host: Scheduler + PointerCapture + ResizeObserver {}

impl<T> Host for T where T: Scheduler + PointerCapture + ResizeObserver + ?Sized {}
