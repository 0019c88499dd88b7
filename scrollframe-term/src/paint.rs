//! Paints a laid-out element tree into the cell buffer.

use std::ops::Range;
use std::time::Duration;

use palette::{LinSrgb, Mix, Srgb};
use scrollframe::{Axis, Color, Content, Element, Fade, Rect, ScrollRegion, Slot};
use unicode_width::UnicodeWidthChar;

use crate::buffer::{Buffer, Rgb, FOREGROUND};
use crate::layout::Frame;
use crate::view::TextView;

const STATUS_BG: Rgb = Rgb::new(40, 42, 54);
const STATUS_FG: Rgb = Rgb::new(150, 155, 175);

/// Track opacity animations, one per axis.
///
/// A fade starts settled at whatever opacity its track first renders with.
#[derive(Debug, Default)]
pub struct Fades {
    horizontal: Option<Fade>,
    vertical: Option<Fade>,
}

impl Fades {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start fades toward the opacities the tracks were rendered with.
    pub fn sync(&mut self, root: &Element, now: Duration) {
        for axis in Axis::ALL {
            let Some(track) = find_track(root, axis) else {
                continue;
            };
            let (Some(opacity), Some(transition)) = (track.style.opacity, track.style.transition)
            else {
                continue;
            };
            let slot = self.slot_mut(axis);
            match slot {
                Some(fade) => {
                    if fade.retarget(opacity, transition, now) {
                        log::trace!("{} track fading to {opacity}", axis.name());
                    }
                }
                None => *slot = Some(Fade::settled(opacity)),
            }
        }
    }

    pub fn opacity(&self, axis: Axis, now: Duration) -> f32 {
        self.slot(axis).map_or(1.0, |fade| fade.value_at(now))
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        Axis::ALL
            .iter()
            .filter_map(|axis| self.slot(*axis))
            .any(|fade| !fade.is_finished(now))
    }

    fn slot(&self, axis: Axis) -> Option<&Fade> {
        match axis {
            Axis::X => self.horizontal.as_ref(),
            Axis::Y => self.vertical.as_ref(),
        }
    }

    fn slot_mut(&mut self, axis: Axis) -> &mut Option<Fade> {
        match axis {
            Axis::X => &mut self.horizontal,
            Axis::Y => &mut self.vertical,
        }
    }
}

fn find_track(root: &Element, axis: Axis) -> Option<&Element> {
    let slot = Slot::track(axis);
    root.child_elements()
        .iter()
        .find(|child| child.node_ref.map(|r| r.slot()) == Some(slot))
}

/// Paint `root` as laid out in `frame`.
pub fn paint(
    buffer: &mut Buffer,
    root: &Element,
    frame: &Frame,
    view: &TextView,
    fades: &Fades,
    now: Duration,
) {
    let mut painter = Painter {
        buffer,
        frame,
        view,
        fades,
        now,
    };
    painter.element(root, 1.0);
}

struct Painter<'a> {
    buffer: &'a mut Buffer,
    frame: &'a Frame,
    view: &'a TextView,
    fades: &'a Fades,
    now: Duration,
}

impl Painter<'_> {
    fn element(&mut self, element: &Element, inherited: f32) {
        let Some(node_ref) = element.node_ref else {
            return;
        };
        let Some(rect) = self.frame.rect_of(node_ref) else {
            return;
        };

        let slot = node_ref.slot();
        let opacity = match slot {
            Slot::TrackHorizontal | Slot::TrackVertical => {
                let axis = slot.axis().unwrap_or(Axis::Y);
                inherited * self.fades.opacity(axis, self.now)
            }
            _ => inherited * element.style.opacity.unwrap_or(1.0),
        };

        if let Some(color) = element.style.background {
            self.fill(rect, color.fade(opacity));
        }
        if slot == Slot::View {
            self.text(rect);
        }

        if let Content::Children(children) = &element.content {
            for child in children {
                self.element(child, opacity);
            }
        }
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        if color.is_transparent() {
            return;
        }
        for y in span(rect.y, rect.height, self.buffer.height()) {
            for x in span(rect.x, rect.width, self.buffer.width()) {
                if let Some(cell) = self.buffer.get_mut(x, y) {
                    cell.bg = blend(cell.bg, color);
                }
            }
        }
    }

    /// The view's lines, shifted by its scroll position.
    fn text(&mut self, rect: Rect) {
        let rows = span(rect.y, rect.height, self.buffer.height());
        let cols = span(rect.x, rect.width, self.buffer.width());
        let top = self.view.scroll_top().round() as usize;
        let left = self.view.scroll_left().round() as usize;

        for (row, y) in rows.enumerate() {
            let Some(line) = self.view.lines().get(top + row) else {
                break;
            };
            let mut column = 0;
            let mut x = cols.start;
            for ch in line.chars() {
                let width = ch.width().unwrap_or(0);
                if width == 0 {
                    continue;
                }
                if column < left {
                    column += width;
                    // A wide char cut by the left edge leaves a gap
                    if column > left {
                        x += (column - left) as u16;
                    }
                    continue;
                }
                if usize::from(x) + width > usize::from(cols.end) {
                    break;
                }
                if let Some(cell) = self.buffer.get_mut(x, y) {
                    cell.char = ch;
                    cell.fg = FOREGROUND;
                }
                if width == 2 {
                    if let Some(cell) = self.buffer.get_mut(x + 1, y) {
                        cell.char = ' ';
                        cell.wide_continuation = true;
                    }
                }
                x += width as u16;
                column += width;
            }
        }
    }
}

/// Write a full-width status line at row `y`.
pub fn status_line(buffer: &mut Buffer, y: u16, text: &str) {
    let mut x = 0;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0) as u16;
        if width == 0 {
            continue;
        }
        if x + width > buffer.width() {
            break;
        }
        if let Some(cell) = buffer.get_mut(x, y) {
            cell.char = ch;
            cell.fg = STATUS_FG;
        }
        x += width;
    }
    for col in 0..buffer.width() {
        if let Some(cell) = buffer.get_mut(col, y) {
            cell.bg = STATUS_BG;
        }
    }
}

/// Cells covered by `[start, start + len)`, rounded to the nearest edges.
fn span(start: f64, len: f64, limit: u16) -> Range<u16> {
    let to_cell = |v: f64| v.round().clamp(0.0, f64::from(limit)) as u16;
    to_cell(start)..to_cell(start + len)
}

/// Composite `over` onto `under` in linear light.
fn blend(under: Rgb, over: Color) -> Rgb {
    let base: LinSrgb = Srgb::new(under.r, under.g, under.b).into_linear();
    let top: LinSrgb = Srgb::new(over.r, over.g, over.b).into_linear();
    let mixed: Srgb<u8> = Srgb::from_linear(base.mix(top, over.a.clamp(0.0, 1.0)));
    Rgb::new(mixed.red, mixed.green, mixed.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_rounds_to_cells() {
        assert_eq!(span(2.0, 3.0, 80), 2..5);
        assert_eq!(span(2.4, 3.3, 80), 2..6);
        assert_eq!(span(-4.0, 10.0, 80), 0..6);
        assert_eq!(span(78.0, 10.0, 80), 78..80);
    }

    #[test]
    fn test_blend_extremes() {
        let under = Rgb::new(10, 20, 30);
        assert_eq!(blend(under, Color::rgba(200, 100, 50, 0.0)), under);
        assert_eq!(
            blend(under, Color::rgb(200, 100, 50)),
            Rgb::new(200, 100, 50)
        );
    }

    #[test]
    fn test_status_line_fills_row() {
        let mut buffer = Buffer::new(10, 2);
        status_line(&mut buffer, 1, "hi");

        let first = *buffer.get_mut(0, 1).unwrap();
        assert_eq!(first.char, 'h');
        assert_eq!(buffer.get_mut(9, 1).unwrap().bg, STATUS_BG);
        assert_eq!(buffer.get_mut(9, 0).unwrap().bg, crate::buffer::BACKGROUND);
    }
}
