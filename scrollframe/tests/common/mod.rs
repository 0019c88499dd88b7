#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use scrollframe::{
    Callbacks, Cursor, Event, MemoryRegion, PointerCapture, ResizeObserver, ResizeTarget,
    Scheduler, ScrollRegion, Scrollbar, ScrollbarConfig, TimerHandle, TimerQueue, TimerRole,
};

pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Host double with a manual clock.
#[derive(Debug)]
pub struct TestHost {
    pub timers: TimerQueue,
    pub captured: bool,
    pub captures: usize,
    pub cursor: Cursor,
    pub text_selection: bool,
    pub observed: Vec<ResizeTarget>,
    pub disconnected: bool,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            timers: TimerQueue::new(),
            captured: false,
            captures: 0,
            cursor: Cursor::Default,
            text_selection: true,
            observed: Vec::new(),
            disconnected: false,
        }
    }

    /// Move the clock to `until`, delivering every timer that falls due.
    pub fn advance_to<V: ScrollRegion>(&mut self, bar: &mut Scrollbar<V>, until: Duration) {
        while let Some((handle, _)) = self.timers.pop_due(until) {
            bar.handle_event(Event::Timer(handle), self);
        }
    }

    pub fn advance<V: ScrollRegion>(&mut self, bar: &mut Scrollbar<V>, by: Duration) {
        let until = self.timers.now() + by;
        self.advance_to(bar, until);
    }
}

impl Scheduler for TestHost {
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

impl PointerCapture for TestHost {
    fn capture_pointer(&mut self) {
        self.captured = true;
        self.captures += 1;
    }

    fn release_pointer(&mut self) {
        self.captured = false;
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn set_text_selection(&mut self, enabled: bool) {
        self.text_selection = enabled;
    }
}

impl ResizeObserver for TestHost {
    fn observe(&mut self, target: ResizeTarget) {
        self.observed.push(target);
    }

    fn disconnect(&mut self) {
        self.observed.clear();
        self.disconnected = true;
    }
}

pub type Log = Rc<RefCell<Vec<&'static str>>>;

/// Callbacks that append their name to a shared log.
pub fn recording_callbacks() -> (Callbacks, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let callbacks = Callbacks::new()
        .on_scroll_start({
            let log = log.clone();
            move || log.borrow_mut().push("start")
        })
        .on_scroll_stop({
            let log = log.clone();
            move || log.borrow_mut().push("stop")
        })
        .on_scroll({
            let log = log.clone();
            move |_| log.borrow_mut().push("scroll")
        })
        .on_scroll_frame({
            let log = log.clone();
            move |_| log.borrow_mut().push("frame")
        })
        .on_update({
            let log = log.clone();
            move |_| log.borrow_mut().push("update")
        });
    (callbacks, log)
}

pub fn count(log: &Log, name: &str) -> usize {
    log.borrow().iter().filter(|entry| **entry == name).count()
}

/// A mounted widget over a viewport of `viewport` with content of `content`.
pub fn mounted(
    config: ScrollbarConfig,
    viewport: (f64, f64),
    content: (f64, f64),
) -> (Scrollbar<MemoryRegion>, TestHost) {
    let mut host = TestHost::new();
    let mut bar: Scrollbar<MemoryRegion> = Scrollbar::new(config);
    bar.attach_view(
        MemoryRegion::new(viewport.0, viewport.1, content.0, content.1),
        &mut host,
    );
    bar.mount(&mut host);
    (bar, host)
}
