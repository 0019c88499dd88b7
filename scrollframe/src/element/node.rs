use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Axis, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// The parts of the widget that can be rendered and referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Container,
    View,
    TrackHorizontal,
    TrackVertical,
    ThumbHorizontal,
    ThumbVertical,
}

impl Slot {
    pub fn track(axis: Axis) -> Self {
        match axis {
            Axis::X => Slot::TrackHorizontal,
            Axis::Y => Slot::TrackVertical,
        }
    }

    pub fn thumb(axis: Axis) -> Self {
        match axis {
            Axis::X => Slot::ThumbHorizontal,
            Axis::Y => Slot::ThumbVertical,
        }
    }

    /// Axis of a track or thumb slot.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Slot::TrackHorizontal | Slot::ThumbHorizontal => Some(Axis::X),
            Slot::TrackVertical | Slot::ThumbVertical => Some(Axis::Y),
            Slot::Container | Slot::View => None,
        }
    }

    pub fn is_track(self) -> bool {
        matches!(self, Slot::TrackHorizontal | Slot::TrackVertical)
    }
}

/// Reference a host uses to report the measured box of an element back to
/// the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(Slot);

impl NodeRef {
    pub const fn new(slot: Slot) -> Self {
        Self(slot)
    }

    pub const fn slot(self) -> Slot {
        self.0
    }
}

/// Events an element wants routed to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    KeyDown,
    Scroll,
    PointerEnter,
    PointerLeave,
    Click(Axis),
    PointerDown(Axis),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Region,
    Scrollbar,
}

/// Accessibility attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accessibility {
    pub role: Option<Role>,
    pub label: Option<String>,
    pub orientation: Option<Axis>,
    /// Id of the element a scrollbar controls.
    pub controls: Option<String>,
    pub value_min: Option<u8>,
    pub value_max: Option<u8>,
    pub value_now: Option<u8>,
    /// 0 = reachable by keyboard focus, -1 = not.
    pub tab_index: Option<i8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub slot: Option<Slot>,
    pub node_ref: Option<NodeRef>,
    pub class_names: Vec<String>,
    pub style: Style,
    pub handlers: Vec<Handler>,
    pub a11y: Accessibility,
    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            slot: None,
            node_ref: None,
            class_names: Vec::new(),
            style: Style::default(),
            handlers: Vec::new(),
            a11y: Accessibility::default(),
            content: Content::None,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.class_names.push(name.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn handler(mut self, handler: Handler) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn handlers(mut self, handlers: impl IntoIterator<Item = Handler>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    pub fn a11y(mut self, a11y: Accessibility) -> Self {
        self.a11y = a11y;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    /// Child elements, empty for text and empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn handles(&self, handler: Handler) -> bool {
        self.handlers.contains(&handler)
    }
}
