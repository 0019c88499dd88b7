//! Turns crossterm input into widget events.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtButton,
    MouseEvent, MouseEventKind,
};
use log::trace;
use scrollframe::{Axis, Event, Key, Modifiers, MouseButton, NodeRef, Slot};

use crate::layout::Frame;

/// Lines or columns scrolled per wheel notch.
const WHEEL_STEP: f64 = 3.0;

/// What the loop should do with one terminal event.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Widget(Event),
    /// Scroll the view directly, as a native wheel would.
    Wheel { dx: f64, dy: f64 },
    Quit,
}

/// Remembers which track the pointer is over between events.
#[derive(Debug, Default)]
pub struct InputRouter {
    hovered: Option<Axis>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one event. `captured` routes every pointer move and release
    /// to the widget regardless of position.
    pub fn route(&mut self, event: CrosstermEvent, frame: &Frame, captured: bool) -> Vec<Input> {
        match event {
            CrosstermEvent::Key(key) => convert_key_event(key).into_iter().collect(),
            CrosstermEvent::Mouse(mouse) => self.mouse(mouse, frame, captured),
            _ => Vec::new(),
        }
    }

    fn mouse(&mut self, mouse: MouseEvent, frame: &Frame, captured: bool) -> Vec<Input> {
        // Cell centers, so a click lands inside the cell's box
        let x = f64::from(mouse.column) + 0.5;
        let y = f64::from(mouse.row) + 0.5;
        let hit = frame.hit(x, y);
        let inside = frame
            .rect_of(NodeRef::new(Slot::Container))
            .is_some_and(|rect| rect.contains(x, y));

        let mut out = Vec::new();
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.hover(hit.and_then(Slot::axis), &mut out);
                if captured {
                    out.push(Input::Widget(Event::PointerMove { x, y }));
                }
            }
            MouseEventKind::Down(button) => {
                out.push(Input::Widget(if inside { Event::Focus } else { Event::Blur }));
                let button = convert_button(button);
                match hit {
                    Some(slot @ (Slot::ThumbHorizontal | Slot::ThumbVertical)) => {
                        if let Some(axis) = slot.axis() {
                            out.push(Input::Widget(Event::ThumbPointerDown { axis, x, y, button }));
                        }
                    }
                    Some(slot) if slot.is_track() => {
                        if let Some(axis) = slot.axis() {
                            out.push(Input::Widget(Event::TrackClick { axis, x, y, button }));
                        }
                    }
                    _ => {}
                }
            }
            MouseEventKind::Up(_) => {
                if captured {
                    out.push(Input::Widget(Event::PointerUp { x, y }));
                }
            }
            MouseEventKind::ScrollDown if inside => out.push(Input::Wheel {
                dx: 0.0,
                dy: WHEEL_STEP,
            }),
            MouseEventKind::ScrollUp if inside => out.push(Input::Wheel {
                dx: 0.0,
                dy: -WHEEL_STEP,
            }),
            MouseEventKind::ScrollRight if inside => out.push(Input::Wheel {
                dx: WHEEL_STEP,
                dy: 0.0,
            }),
            MouseEventKind::ScrollLeft if inside => out.push(Input::Wheel {
                dx: -WHEEL_STEP,
                dy: 0.0,
            }),
            _ => {}
        }
        out
    }

    fn hover(&mut self, axis: Option<Axis>, out: &mut Vec<Input>) {
        if axis == self.hovered {
            return;
        }
        trace!("hover {:?} -> {:?}", self.hovered, axis);
        if let Some(previous) = self.hovered {
            out.push(Input::Widget(Event::PointerLeaveTrack(previous)));
        }
        if let Some(current) = axis {
            out.push(Input::Widget(Event::PointerEnterTrack(current)));
        }
        self.hovered = axis;
    }
}

fn convert_button(button: CtButton) -> MouseButton {
    match button {
        CtButton::Left => MouseButton::Left,
        CtButton::Right => MouseButton::Right,
        CtButton::Middle => MouseButton::Middle,
    }
}

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::F(n) => Some(Key::F(n)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::Delete => Some(Key::Delete),
        _ => None,
    }
}

fn convert_key_event(event: KeyEvent) -> Option<Input> {
    // Only handle key press events, not release or repeat
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let quit = matches!(event.code, KeyCode::Char('q') | KeyCode::Esc)
        || (event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c'));
    if quit {
        return Some(Input::Quit);
    }

    let key = convert_key(event.code)?;
    Some(Input::Widget(Event::KeyDown {
        key,
        modifiers: convert_modifiers(event.modifiers),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use scrollframe::{Element, Rect, Style};

    fn frame() -> Frame {
        let root = Element::box_().node_ref(NodeRef::new(Slot::Container)).child(
            Element::box_()
                .node_ref(NodeRef::new(Slot::TrackVertical))
                .style(Style::new().right(0.0).width(1.0))
                .child(
                    Element::box_()
                        .node_ref(NodeRef::new(Slot::ThumbVertical))
                        .style(Style::new().height(3.0)),
                ),
        );
        layout(&root, Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_enter_and_leave_track() {
        let mut router = InputRouter::new();
        let frame = frame();

        let entered = router.route(mouse(MouseEventKind::Moved, 9, 5), &frame, false);
        assert_eq!(entered, vec![Input::Widget(Event::PointerEnterTrack(Axis::Y))]);

        // Moving onto the thumb stays on the same track
        let on_thumb = router.route(mouse(MouseEventKind::Moved, 9, 1), &frame, false);
        assert!(on_thumb.is_empty());

        let left = router.route(mouse(MouseEventKind::Moved, 2, 5), &frame, false);
        assert_eq!(left, vec![Input::Widget(Event::PointerLeaveTrack(Axis::Y))]);
    }

    #[test]
    fn test_press_on_thumb_and_track() {
        let mut router = InputRouter::new();
        let frame = frame();

        let thumb = router.route(mouse(MouseEventKind::Down(CtButton::Left), 9, 1), &frame, false);
        assert_eq!(
            thumb,
            vec![
                Input::Widget(Event::Focus),
                Input::Widget(Event::ThumbPointerDown {
                    axis: Axis::Y,
                    x: 9.5,
                    y: 1.5,
                    button: MouseButton::Left,
                }),
            ]
        );

        let track = router.route(mouse(MouseEventKind::Down(CtButton::Left), 9, 7), &frame, false);
        assert!(matches!(
            track[1],
            Input::Widget(Event::TrackClick { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn test_captured_moves_go_anywhere() {
        let mut router = InputRouter::new();
        let frame = frame();

        let moved = router.route(mouse(MouseEventKind::Drag(CtButton::Left), 40, 30), &frame, true);
        assert_eq!(
            moved,
            vec![Input::Widget(Event::PointerMove { x: 40.5, y: 30.5 })]
        );

        let up = router.route(mouse(MouseEventKind::Up(CtButton::Left), 40, 30), &frame, false);
        assert!(up.is_empty());
    }

    #[test]
    fn test_wheel_only_inside() {
        let mut router = InputRouter::new();
        let frame = frame();

        assert_eq!(
            router.route(mouse(MouseEventKind::ScrollDown, 3, 3), &frame, false),
            vec![Input::Wheel { dx: 0.0, dy: 3.0 }]
        );
        assert!(router
            .route(mouse(MouseEventKind::ScrollDown, 30, 3), &frame, false)
            .is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let press = |code| {
            convert_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        };
        assert_eq!(press(KeyCode::Char('q')), Some(Input::Quit));
        assert_eq!(press(KeyCode::Esc), Some(Input::Quit));
        assert_eq!(
            press(KeyCode::PageDown),
            Some(Input::Widget(Event::KeyDown {
                key: Key::PageDown,
                modifiers: Modifiers::new(),
            }))
        );
    }
}
