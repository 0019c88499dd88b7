//! Default appearance and renderer overrides for the widget's parts.

use std::rc::Rc;

use crate::element::{Element, Handler, NodeRef};
use crate::types::{Axis, Color, Cursor, Length, Overflow, Position, Radius, Style};

/// What the widget hands to a renderer for one part.
///
/// `style` carries only what the widget computed (thumb size and transform,
/// track opacity and display) when the part is overridden; default styling is
/// left out entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderProps {
    pub style: Style,
    pub handlers: Vec<Handler>,
    pub children: Vec<Element>,
    pub node_ref: NodeRef,
}

impl RenderProps {
    /// A plain element carrying the props, for renderers that only want to
    /// add their own styling on top.
    pub fn into_element(self) -> Element {
        Element::box_()
            .slot(self.node_ref.slot())
            .node_ref(self.node_ref)
            .style(self.style)
            .handlers(self.handlers)
            .children(self.children)
    }
}

/// Builds the element for one part of the widget.
pub trait Renderer {
    fn render(&self, props: RenderProps) -> Element;
}

impl<F> Renderer for F
where
    F: Fn(RenderProps) -> Element,
{
    fn render(&self, props: RenderProps) -> Element {
        self(props)
    }
}

/// Renderer choice for a part, made once per render pass.
pub(crate) enum SlotRenderer<'a> {
    Default,
    Custom(&'a dyn Renderer),
}

impl<'a> SlotRenderer<'a> {
    pub(crate) fn select(renderer: Option<&'a Rc<dyn Renderer>>) -> Self {
        match renderer {
            Some(renderer) => SlotRenderer::Custom(renderer.as_ref()),
            None => SlotRenderer::Default,
        }
    }

    pub(crate) fn is_default(&self) -> bool {
        matches!(self, SlotRenderer::Default)
    }

    /// Default styling for the part, or nothing when overridden.
    pub(crate) fn base_style(&self, default: impl FnOnce() -> Style) -> Style {
        match self {
            SlotRenderer::Default => default(),
            SlotRenderer::Custom(_) => Style::default(),
        }
    }

    pub(crate) fn render(&self, props: RenderProps) -> Element {
        match self {
            SlotRenderer::Default => props.into_element(),
            SlotRenderer::Custom(renderer) => renderer.render(props),
        }
    }
}

const TRACK_THICKNESS: f64 = 6.0;
const TRACK_INSET: f64 = 2.0;
const TRACK_RADIUS: f64 = 3.0;

pub fn container_style() -> Style {
    Style::new()
        .position(Position::Relative)
        .overflow(Overflow::Hidden)
        .width(Length::Percent(100.0))
        .height(Length::Percent(100.0))
}

pub fn view_style() -> Style {
    Style::new()
        .position(Position::Absolute)
        .inset(0.0, 0.0, 0.0, 0.0)
        .overflow(Overflow::Scroll)
}

pub fn track_style(axis: Axis) -> Style {
    let style = Style::new()
        .position(Position::Absolute)
        .right(TRACK_INSET)
        .bottom(TRACK_INSET)
        .border_radius(Radius::Px(TRACK_RADIUS));
    match axis {
        Axis::X => style.height(TRACK_THICKNESS).left(TRACK_INSET),
        Axis::Y => style.width(TRACK_THICKNESS).top(TRACK_INSET),
    }
}

pub fn thumb_style(axis: Axis) -> Style {
    let style = Style::new()
        .position(Position::Absolute)
        .cursor(Cursor::Pointer)
        .border_radius(Radius::Inherit)
        .background(Color::rgba(0, 0, 0, 0.2));
    match axis {
        Axis::X => style.height(Length::Percent(100.0)),
        Axis::Y => style.width(Length::Percent(100.0)),
    }
}
