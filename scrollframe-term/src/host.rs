//! The widget's view of the terminal: clock, pointer and resize bookkeeping.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::trace;
use scrollframe::{
    Cursor, PointerCapture, ResizeObserver, ResizeTarget, Scheduler, TimerHandle, TimerQueue,
    TimerRole,
};

/// Host capabilities backed by the event loop.
///
/// Timers live in a [`TimerQueue`] whose clock is anchored at `start`; the
/// loop sleeps until [`TermHost::next_deadline`] and then drains
/// [`TermHost::next_expired`].
#[derive(Debug)]
pub struct TermHost {
    start: Instant,
    timers: TimerQueue,
    captured: bool,
    cursor: Cursor,
    observed: HashSet<ResizeTarget>,
}

impl TermHost {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            timers: TimerQueue::new(),
            captured: false,
            cursor: Cursor::Default,
            observed: HashSet::new(),
        }
    }

    /// Time since the host started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Pop the next timer that has expired by now. The timer clock catches up
    /// with the wall clock when nothing is left.
    pub fn next_expired(&mut self) -> Option<TimerHandle> {
        let now = self.elapsed();
        self.timers.pop_due(now).map(|(handle, role)| {
            trace!("timer {:?} ({:?}) expired", handle, role);
            handle
        })
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers
            .next_deadline()
            .map(|deadline| self.start + deadline)
    }

    /// Whether pointer moves and ups go to the widget wherever they happen.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn is_observed(&self, target: ResizeTarget) -> bool {
        self.observed.contains(&target)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl Default for TermHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TermHost {
    fn now(&self) -> Duration {
        self.timers.now()
    }

    fn schedule(&mut self, delay: Duration, role: TimerRole) -> TimerHandle {
        self.timers.schedule(delay, role)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.cancel(handle);
    }
}

impl PointerCapture for TermHost {
    fn capture_pointer(&mut self) {
        self.captured = true;
    }

    fn release_pointer(&mut self) {
        self.captured = false;
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        // Terminals have no pointer shape; the status line shows it instead
        self.cursor = cursor;
    }

    fn set_text_selection(&mut self, enabled: bool) {
        // Mouse capture already keeps the terminal from selecting text
        trace!("text selection {}", if enabled { "enabled" } else { "disabled" });
    }
}

impl ResizeObserver for TermHost {
    fn observe(&mut self, target: ResizeTarget) {
        self.observed.insert(target);
    }

    fn disconnect(&mut self) {
        self.observed.clear();
    }
}
