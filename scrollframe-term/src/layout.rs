//! Resolves the widget's element tree into boxes.
//!
//! Every part of the widget is positioned with insets and fixed sizes, so
//! layout is a single top-down pass: each box is resolved against its parent,
//! then shifted by its translate transform.

use scrollframe::{Axis, Content, Element, Length, NodeRef, Rect, Slot, Style};

/// A laid-out element.
#[derive(Debug, Clone, PartialEq)]
pub struct Placed {
    pub slot: Option<Slot>,
    pub node_ref: Option<NodeRef>,
    pub rect: Rect,
}

/// Boxes of one render pass, in paint order.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    placed: Vec<Placed>,
}

impl Frame {
    pub fn rect_of(&self, node_ref: NodeRef) -> Option<Rect> {
        self.placed
            .iter()
            .find(|p| p.node_ref == Some(node_ref))
            .map(|p| p.rect)
    }

    /// The topmost widget part under a point.
    pub fn hit(&self, x: f64, y: f64) -> Option<Slot> {
        self.placed
            .iter()
            .rev()
            .filter(|p| p.rect.contains(x, y))
            .find_map(|p| p.slot)
    }
}

pub fn layout(root: &Element, area: Rect) -> Frame {
    let mut frame = Frame::default();
    place(root, area, &mut frame);
    frame
}

fn place(element: &Element, parent: Rect, frame: &mut Frame) {
    if element.style.is_hidden() {
        return;
    }

    let rect = resolve(&element.style, parent);
    frame.placed.push(Placed {
        slot: element.slot.or(element.node_ref.map(NodeRef::slot)),
        node_ref: element.node_ref,
        rect,
    });

    if let Content::Children(children) = &element.content {
        for child in children {
            place(child, rect, frame);
        }
    }
}

fn resolve(style: &Style, parent: Rect) -> Rect {
    let (x, width) = resolve_span(style.left, style.right, style.width, parent.x, parent.width);
    let (y, height) = resolve_span(style.top, style.bottom, style.height, parent.y, parent.height);
    let height = clamp_height(height, style, parent.height);

    let mut rect = Rect::new(x, y, width, height);
    if let Some(translate) = style.transform {
        match translate.axis {
            Axis::X => rect.x += translate.px,
            Axis::Y => rect.y += translate.px,
        }
    }
    rect
}

/// Start and length along one axis from two insets and a size.
fn resolve_span(
    start: Option<f64>,
    end: Option<f64>,
    size: Option<Length>,
    origin: f64,
    extent: f64,
) -> (f64, f64) {
    let size = size.and_then(|length| length.resolve(extent));
    match (start, end, size) {
        (Some(start), _, Some(len)) => (origin + start, len),
        (None, Some(end), Some(len)) => (origin + extent - end - len, len),
        (None, None, Some(len)) => (origin, len),
        (Some(start), Some(end), None) => (origin + start, (extent - start - end).max(0.0)),
        (Some(start), None, None) => (origin + start, (extent - start).max(0.0)),
        (None, Some(end), None) => (origin, (extent - end).max(0.0)),
        (None, None, None) => (origin, extent),
    }
}

fn clamp_height(height: f64, style: &Style, parent: f64) -> f64 {
    let min = style.min_height.and_then(|l| l.resolve(parent)).unwrap_or(0.0);
    let max = style
        .max_height
        .and_then(|l| l.resolve(parent))
        .unwrap_or(f64::INFINITY);
    height.min(max).max(min)
}
