//! The event loop.

use std::time::{Duration, Instant};

use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures::StreamExt;
use log::{debug, error, trace};
use scrollframe::{Axis, Event, NodeRef, Rect, ResizeTarget, ScrollRegion, Scrollbar, Slot};
use tokio::time::{sleep_until, MissedTickBehavior};

use crate::error::Result;
use crate::host::TermHost;
use crate::input::{Input, InputRouter};
use crate::layout::{layout, Frame};
use crate::paint::{self, Fades};
use crate::terminal::Terminal;
use crate::view::TextView;

/// Repaint interval while a track is fading.
const FADE_FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    bar: Scrollbar<TextView>,
    host: TermHost,
    terminal: Terminal,
    router: InputRouter,
    fades: Fades,
    frame: Frame,
    container: Option<Rect>,
}

impl App {
    pub fn new(mut bar: Scrollbar<TextView>, view: TextView, terminal: Terminal) -> Self {
        let mut host = TermHost::new();
        bar.attach_view(view, &mut host);
        bar.mount(&mut host);
        Self {
            bar,
            host,
            terminal,
            router: InputRouter::new(),
            fades: Fades::new(),
            frame: Frame::default(),
            container: None,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let mut events = EventStream::new();
        let mut fade_interval = tokio::time::interval(FADE_FRAME);
        fade_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            self.fire_timers();
            self.draw()?;

            let animating = self.fades.is_animating(self.host.elapsed());
            let deadline = self.host.next_deadline();

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        self.fire_timers();
                        if self.dispatch(event) == Flow::Quit {
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        error!("Event stream error: {}", e);
                        return Err(e.into());
                    }
                    None => break,
                },
                _ = sleep_until_optional(deadline) => {
                    trace!("timer deadline reached");
                }
                _ = fade_interval.tick(), if animating => {}
            }
        }

        debug!("shutting down");
        self.bar.unmount(&mut self.host);
        Ok(())
    }

    fn dispatch(&mut self, event: CrosstermEvent) -> Flow {
        let inputs = self.router.route(event, &self.frame, self.host.is_captured());
        for input in inputs {
            match input {
                Input::Widget(event) => {
                    let result = self.bar.handle_event(event, &mut self.host);
                    trace!("{:?}", result);
                }
                Input::Wheel { dx, dy } => self.wheel(dx, dy),
                Input::Quit => return Flow::Quit,
            }
        }
        Flow::Continue
    }

    fn wheel(&mut self, dx: f64, dy: f64) {
        let Some(view) = self.bar.view_mut() else {
            return;
        };
        view.scroll_by(dx, dy);
        if view.take_scroll_notification() {
            self.bar.handle_event(Event::Scroll, &mut self.host);
        }
    }

    fn fire_timers(&mut self) {
        while let Some(handle) = self.host.next_expired() {
            self.bar.handle_event(Event::Timer(handle), &mut self.host);
        }
    }

    fn draw(&mut self) -> Result<()> {
        let (width, height) = self.terminal.begin_frame()?;
        let area = Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height.saturating_sub(1)),
        );

        let mut root = self.bar.render();
        let mut frame = layout(&root, area);
        if self.sync_boxes(&frame) {
            root = self.bar.render();
            frame = layout(&root, area);
        }

        let now = self.host.elapsed();
        self.fades.sync(&root, now);
        let status = self.status();

        let buffer = self.terminal.buffer_mut();
        if let Some(view) = self.bar.view() {
            paint::paint(buffer, &root, &frame, view, &self.fades, now);
        }
        paint::status_line(buffer, height.saturating_sub(1), &status);

        self.frame = frame;
        self.terminal.end_frame()?;
        Ok(())
    }

    /// Report laid-out boxes back to the widget. Returns true if anything
    /// the widget renders from changed.
    fn sync_boxes(&mut self, frame: &Frame) -> bool {
        let mut changed = false;

        for axis in Axis::ALL {
            let node_ref = NodeRef::new(Slot::track(axis));
            if let Some(rect) = frame.rect_of(node_ref) {
                if self.bar.track_rect(axis) != Some(rect) {
                    self.bar.measure(node_ref, rect);
                    changed = true;
                }
            }
        }

        let container = frame.rect_of(NodeRef::new(Slot::Container));
        if container != self.container {
            self.container = container;
            changed |= self.resized(ResizeTarget::Container);
        }

        if let Some(rect) = frame.rect_of(NodeRef::new(Slot::View)) {
            let resized = self
                .bar
                .view_mut()
                .is_some_and(|view| view.set_viewport(rect.width, rect.height));
            if resized {
                changed |= self.resized(ResizeTarget::View);
            }
        }

        changed
    }

    fn resized(&mut self, target: ResizeTarget) -> bool {
        if !self.host.is_observed(target) {
            return false;
        }
        self.bar
            .handle_event(Event::Resize(target), &mut self.host)
            .is_consumed()
    }

    fn status(&self) -> String {
        let metrics = self.bar.metrics();
        let range = (metrics.scroll_height - metrics.client_height).max(0.0);
        format!(
            " line {:.0}/{:.0}  {:>3.0}%  col {:.0}  {:?}  cursor {:?}{}  q: quit",
            metrics.scroll_top,
            range,
            metrics.top * 100.0,
            metrics.scroll_left,
            self.bar.visibility(),
            self.host.cursor(),
            if self.bar.is_focused() { "  focused" } else { "" },
        )
    }
}

/// Sleep until a deadline, or wait forever if None.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollframe::Element;

    #[test]
    fn test_render_tree_lays_out() {
        let mut host = TermHost::new();
        let mut bar: Scrollbar<TextView> = Scrollbar::new(crate::demo_config(false));
        bar.attach_view(TextView::new(crate::demo_lines()), &mut host);
        bar.mount(&mut host);

        let root: Element = bar.render();
        let frame = layout(&root, Rect::new(0.0, 0.0, 80.0, 24.0));

        let track = frame.rect_of(NodeRef::new(Slot::TrackVertical)).unwrap();
        assert_eq!(track, Rect::new(79.0, 0.0, 1.0, 23.0));
        let view = frame.rect_of(NodeRef::new(Slot::View)).unwrap();
        assert_eq!(view, Rect::new(0.0, 0.0, 80.0, 24.0));
    }
}
