use super::{Axis, Color, Cursor, Display, Length, Overflow, Position, Radius};
use crate::transitions::Transition;

/// Inline translation applied to a thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate {
    pub axis: Axis,
    pub px: f64,
}

/// Inline style of an element.
///
/// Every field is optional so styles can be layered: [`Style::merge`] lets the
/// fields set on the right-hand side win, like spreading one style object over
/// another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub position: Option<Position>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub min_height: Option<Length>,
    pub max_height: Option<Length>,
    pub overflow: Option<Overflow>,
    pub border_radius: Option<Radius>,
    pub background: Option<Color>,
    pub cursor: Option<Cursor>,
    pub opacity: Option<f32>,
    pub transition: Option<Transition>,
    pub display: Option<Display>,
    pub transform: Option<Translate>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer `other` on top of `self`.
    pub fn merge(self, other: Style) -> Self {
        Self {
            position: other.position.or(self.position),
            top: other.top.or(self.top),
            right: other.right.or(self.right),
            bottom: other.bottom.or(self.bottom),
            left: other.left.or(self.left),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            min_height: other.min_height.or(self.min_height),
            max_height: other.max_height.or(self.max_height),
            overflow: other.overflow.or(self.overflow),
            border_radius: other.border_radius.or(self.border_radius),
            background: other.background.or(self.background),
            cursor: other.cursor.or(self.cursor),
            opacity: other.opacity.or(self.opacity),
            transition: other.transition.or(self.transition),
            display: other.display.or(self.display),
            transform: other.transform.or(self.transform),
        }
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Set all four insets at once.
    pub fn inset(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.top = Some(top);
        self.right = Some(right);
        self.bottom = Some(bottom);
        self.left = Some(left);
        self
    }

    pub fn top(mut self, px: f64) -> Self {
        self.top = Some(px);
        self
    }

    pub fn right(mut self, px: f64) -> Self {
        self.right = Some(px);
        self
    }

    pub fn bottom(mut self, px: f64) -> Self {
        self.bottom = Some(px);
        self
    }

    pub fn left(mut self, px: f64) -> Self {
        self.left = Some(px);
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn min_height(mut self, height: impl Into<Length>) -> Self {
        self.min_height = Some(height.into());
        self
    }

    pub fn max_height(mut self, height: impl Into<Length>) -> Self {
        self.max_height = Some(height.into());
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    pub fn border_radius(mut self, radius: Radius) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn translate(mut self, axis: Axis, px: f64) -> Self {
        self.transform = Some(Translate { axis, px });
        self
    }

    /// Set the extent along `axis` (width for X, height for Y).
    pub fn extent(self, axis: Axis, length: impl Into<Length>) -> Self {
        match axis {
            Axis::X => self.width(length),
            Axis::Y => self.height(length),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Some(Display::None)
    }
}
