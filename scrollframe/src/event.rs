use crate::host::ResizeTarget;
use crate::timer::TimerHandle;
use crate::types::Axis;

/// Input delivered to [`Scrollbar::handle_event`](crate::shell::Scrollbar::handle_event).
///
/// Pointer coordinates are in the host's pixel space, the same space used for
/// [`Scrollbar::measure`](crate::shell::Scrollbar::measure).
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The view's scroll position changed.
    Scroll,
    /// An observed box changed size.
    Resize(ResizeTarget),
    /// Pointer entered a track.
    PointerEnterTrack(Axis),
    /// Pointer left a track.
    PointerLeaveTrack(Axis),
    /// Pointer pressed on a thumb.
    ThumbPointerDown {
        axis: Axis,
        x: f64,
        y: f64,
        button: MouseButton,
    },
    /// Pointer moved, anywhere on screen while captured.
    PointerMove { x: f64, y: f64 },
    /// Pointer released, anywhere on screen while captured.
    PointerUp { x: f64, y: f64 },
    /// Click on a track.
    TrackClick {
        axis: Axis,
        x: f64,
        y: f64,
        button: MouseButton,
    },
    /// Key pressed while the widget may have focus.
    KeyDown { key: Key, modifiers: Modifiers },
    /// Widget gained input focus.
    Focus,
    /// Widget lost input focus.
    Blur,
    /// A scheduled timer expired.
    Timer(TimerHandle),
}

/// Outcome of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing happened; the host should run its default action.
    Ignored,
    /// The widget acted; the host must suppress its default action.
    Consumed,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
