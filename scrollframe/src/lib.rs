pub mod callbacks;
pub mod config;
pub mod drag;
pub mod element;
pub mod event;
pub mod geometry;
pub mod host;
pub mod keyboard;
pub mod metrics;
pub mod region;
pub mod render;
pub mod shell;
pub mod timer;
pub mod tracker;
pub mod transitions;
pub mod types;
pub mod visibility;

pub use callbacks::Callbacks;
pub use config::{ConfigError, Renderers, ScrollbarConfig};
pub use drag::{DragController, DragSession};
pub use element::{Accessibility, Content, Element, Handler, NodeRef, Role, Slot};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use geometry::{scroll_ratio, thumb_offset, thumb_size, track_jump_target, ThumbGeometry};
pub use host::{Host, PointerCapture, ResizeObserver, ResizeTarget};
pub use keyboard::{KeyboardNavigator, ScrollCommand};
pub use metrics::{AxisMetrics, ScrollMetrics};
pub use region::{MemoryRegion, ScrollRegion};
pub use render::{RenderProps, Renderer};
pub use shell::Scrollbar;
pub use timer::{Scheduler, TimerHandle, TimerQueue, TimerRole};
pub use tracker::{ScrollEdge, ScrollTracker, SCROLL_STOP_DELAY};
pub use transitions::{Easing, Fade, Transition};
pub use types::*;
pub use visibility::{VisibilityController, VisibilityState};
