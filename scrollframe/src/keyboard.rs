use crate::event::Key;
use crate::metrics::ScrollMetrics;
use crate::types::Axis;

/// A scroll assignment produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub axis: Axis,
    pub position: f64,
}

/// Maps navigation keys to bounded scroll positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardNavigator {
    step: f64,
}

impl KeyboardNavigator {
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    /// Target position for `key`, or `None` if the key is not a navigation
    /// key (its default action must then be left alone).
    pub fn navigate(&self, key: Key, metrics: &ScrollMetrics) -> Option<ScrollCommand> {
        let vertical = metrics.axis(Axis::Y);
        let horizontal = metrics.axis(Axis::X);

        let (axis, target) = match key {
            Key::Up => (Axis::Y, vertical.scroll - self.step),
            Key::Down => (Axis::Y, vertical.scroll + self.step),
            Key::Left => (Axis::X, horizontal.scroll - self.step),
            Key::Right => (Axis::X, horizontal.scroll + self.step),
            Key::Home => (Axis::Y, 0.0),
            Key::End => (Axis::Y, vertical.range()),
            Key::PageUp => (Axis::Y, vertical.scroll - vertical.viewport),
            Key::PageDown => (Axis::Y, vertical.scroll + vertical.viewport),
            _ => return None,
        };

        let range = metrics.axis(axis).range();
        Some(ScrollCommand {
            axis,
            position: target.clamp(0.0, range),
        })
    }
}

impl Default for KeyboardNavigator {
    fn default() -> Self {
        Self::new(40.0)
    }
}
